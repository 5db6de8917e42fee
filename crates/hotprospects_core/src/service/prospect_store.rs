//! Prospect store use-cases.
//!
//! # Responsibility
//! - Own the canonical prospect collection through a repository.
//! - Serialize every mutation behind one lock so readers see consistent state.
//!
//! # Invariants
//! - New records get a fresh id and `date_added = now`.
//! - `update` never touches `id` or `date_added`.
//! - `delete_one` reports absent ids; `delete_many` ignores them.

use crate::model::prospect::{Prospect, ProspectId, ProspectPatch, ProspectValidationError};
use crate::repo::prospect_repo::{ProspectListQuery, ProspectRepository, RepoError};
use log::{info, warn};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for prospect use-cases.
#[derive(Debug)]
pub enum StoreError {
    /// A required field is empty or otherwise invalid.
    Validation(ProspectValidationError),
    /// The referenced id does not exist (stale reference or lost race).
    NotFound(ProspectId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "prospect not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ProspectValidationError> for StoreError {
    fn from(value: ProspectValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// Exclusive owner of the prospect collection.
pub struct ProspectStore<R: ProspectRepository> {
    repo: Mutex<R>,
}

impl<R: ProspectRepository> ProspectStore<R> {
    /// Creates a store over the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo: Mutex::new(repo),
        }
    }

    /// Creates and persists a new prospect.
    ///
    /// # Errors
    /// - `Validation` when `name` is blank; nothing is written.
    pub fn create(
        &self,
        name: impl Into<String>,
        email_address: impl Into<String>,
        is_contacted: bool,
    ) -> StoreResult<Prospect> {
        let prospect = Prospect::new(name, email_address, is_contacted).map_err(|err| {
            warn!("event=prospect_create module=store status=rejected reason={err}");
            err
        })?;

        self.repo.lock().insert_prospect(&prospect)?;
        info!(
            "event=prospect_create module=store status=ok prospect_id={}",
            prospect.id
        );
        Ok(prospect)
    }

    /// Applies `patch` to the prospect with `id`.
    ///
    /// # Errors
    /// - `NotFound` when `id` is absent.
    /// - `Validation` when the patched name is blank; nothing is written.
    pub fn update(&self, id: ProspectId, patch: &ProspectPatch) -> StoreResult<()> {
        let mut repo = self.repo.lock();
        let mut prospect = repo.get_prospect(id)?.ok_or(StoreError::NotFound(id))?;
        if patch.is_empty() {
            return Ok(());
        }

        prospect.apply(patch)?;
        repo.update_prospect(&prospect)?;
        info!("event=prospect_update module=store status=ok prospect_id={id}");
        Ok(())
    }

    /// Flips `is_contacted` and returns the updated record.
    pub fn toggle_contacted(&self, id: ProspectId) -> StoreResult<Prospect> {
        let mut repo = self.repo.lock();
        let mut prospect = repo.get_prospect(id)?.ok_or(StoreError::NotFound(id))?;
        prospect.is_contacted = !prospect.is_contacted;
        repo.update_prospect(&prospect)?;
        info!(
            "event=prospect_toggle module=store status=ok prospect_id={} is_contacted={}",
            id, prospect.is_contacted
        );
        Ok(prospect)
    }

    /// Deletes one prospect.
    ///
    /// # Errors
    /// - `NotFound` when `id` is absent.
    pub fn delete_one(&self, id: ProspectId) -> StoreResult<()> {
        if !self.repo.lock().delete_prospect(id)? {
            return Err(StoreError::NotFound(id));
        }
        info!("event=prospect_delete module=store status=ok prospect_id={id}");
        Ok(())
    }

    /// Deletes every id present in the store and ignores the rest.
    ///
    /// Returns how many records were removed.
    pub fn delete_many(&self, ids: &HashSet<ProspectId>) -> StoreResult<usize> {
        let ids: Vec<ProspectId> = ids.iter().copied().collect();
        let removed = self.repo.lock().delete_prospects(&ids)?;
        info!(
            "event=prospect_delete_many module=store status=ok requested={} removed={}",
            ids.len(),
            removed
        );
        Ok(removed)
    }

    /// Returns one prospect by id.
    pub fn get(&self, id: ProspectId) -> StoreResult<Option<Prospect>> {
        Ok(self.repo.lock().get_prospect(id)?)
    }

    /// Returns every current record in unspecified order.
    pub fn all(&self) -> StoreResult<Vec<Prospect>> {
        Ok(self
            .repo
            .lock()
            .list_prospects(&ProspectListQuery::default())?)
    }

    /// Runs a filter/sort query pushed down to the repository.
    pub fn list(&self, query: &ProspectListQuery) -> StoreResult<Vec<Prospect>> {
        Ok(self.repo.lock().list_prospects(query)?)
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.repo.lock().count_prospects()?)
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
