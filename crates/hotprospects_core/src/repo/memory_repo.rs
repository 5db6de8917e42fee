//! In-memory prospect repository.
//!
//! Backs tests and hosts that supply their own durability. Listing semantics
//! are shared with the query engine through `sort_and_filter`.

use crate::model::prospect::{Prospect, ProspectId};
use crate::query::view::sort_and_filter;
use crate::repo::prospect_repo::{ProspectListQuery, ProspectRepository, RepoError, RepoResult};
use std::collections::BTreeMap;

/// `BTreeMap`-backed prospect repository.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProspectRepository {
    prospects: BTreeMap<ProspectId, Prospect>,
}

impl InMemoryProspectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProspectRepository for InMemoryProspectRepository {
    fn insert_prospect(&mut self, prospect: &Prospect) -> RepoResult<ProspectId> {
        prospect.validate()?;
        if self.prospects.contains_key(&prospect.id) {
            return Err(RepoError::Conflict(prospect.id));
        }
        self.prospects.insert(prospect.id, prospect.clone());
        Ok(prospect.id)
    }

    fn update_prospect(&mut self, prospect: &Prospect) -> RepoResult<()> {
        prospect.validate()?;
        let stored = self
            .prospects
            .get_mut(&prospect.id)
            .ok_or(RepoError::NotFound(prospect.id))?;

        // `date_added` is owned by the stored record.
        stored.name.clone_from(&prospect.name);
        stored.email_address.clone_from(&prospect.email_address);
        stored.is_contacted = prospect.is_contacted;
        Ok(())
    }

    fn get_prospect(&self, id: ProspectId) -> RepoResult<Option<Prospect>> {
        Ok(self.prospects.get(&id).cloned())
    }

    fn list_prospects(&self, query: &ProspectListQuery) -> RepoResult<Vec<Prospect>> {
        let items = self.prospects.values().cloned();
        Ok(match query.sort {
            Some(sort) => sort_and_filter(items, query.filter, sort),
            None => items
                .filter(|prospect| query.filter.matches(prospect))
                .collect(),
        })
    }

    fn delete_prospect(&mut self, id: ProspectId) -> RepoResult<bool> {
        Ok(self.prospects.remove(&id).is_some())
    }

    fn delete_prospects(&mut self, ids: &[ProspectId]) -> RepoResult<usize> {
        Ok(ids
            .iter()
            .filter(|id| self.prospects.remove(*id).is_some())
            .count())
    }

    fn count_prospects(&self) -> RepoResult<usize> {
        Ok(self.prospects.len())
    }
}
