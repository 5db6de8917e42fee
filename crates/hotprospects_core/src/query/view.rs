//! Filter/sort vocabulary and the query engine.

use crate::model::prospect::Prospect;
use crate::repo::prospect_repo::ProspectRepository;
use crate::service::prospect_store::{ProspectStore, StoreResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Fixed partition of prospects by outreach status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProspectFilter {
    /// Every prospect.
    #[default]
    All,
    /// Only `is_contacted == true`.
    Contacted,
    /// Only `is_contacted == false`.
    Uncontacted,
}

impl ProspectFilter {
    /// Returns whether `prospect` belongs to this partition.
    pub fn matches(self, prospect: &Prospect) -> bool {
        match self {
            Self::All => true,
            Self::Contacted => prospect.is_contacted,
            Self::Uncontacted => !prospect.is_contacted,
        }
    }

    /// User-facing list title.
    pub fn title(self) -> &'static str {
        match self {
            Self::All => "Everyone",
            Self::Contacted => "Contacted people",
            Self::Uncontacted => "Uncontacted people",
        }
    }

    /// Stable string id used by the cli and storage queries.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Contacted => "contacted",
            Self::Uncontacted => "uncontacted",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "all" => Some(Self::All),
            "contacted" => Some(Self::Contacted),
            "uncontacted" => Some(Self::Uncontacted),
            _ => None,
        }
    }

    /// Value the `is_contacted` column must equal, or `None` for no predicate.
    pub(crate) fn contacted_predicate(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Contacted => Some(true),
            Self::Uncontacted => Some(false),
        }
    }
}

/// Ascending sort key for prospect views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Case-sensitive byte order on `name`.
    #[default]
    Name,
    /// Chronological order on `date_added`.
    DateAdded,
}

impl SortKey {
    /// Total order: key first, then `id` ascending.
    pub fn compare(self, left: &Prospect, right: &Prospect) -> Ordering {
        let by_key = match self {
            Self::Name => left.name.cmp(&right.name),
            Self::DateAdded => left.date_added.cmp(&right.date_added),
        };
        by_key.then_with(|| left.id.cmp(&right.id))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::DateAdded => "date",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "name" => Some(Self::Name),
            "date" | "date_added" => Some(Self::DateAdded),
            _ => None,
        }
    }
}

/// Filters and sorts `prospects` into a fresh ordered vector.
pub fn sort_and_filter(
    prospects: impl IntoIterator<Item = Prospect>,
    filter: ProspectFilter,
    sort: SortKey,
) -> Vec<Prospect> {
    let mut items: Vec<Prospect> = prospects
        .into_iter()
        .filter(|prospect| filter.matches(prospect))
        .collect();
    items.sort_by(|left, right| sort.compare(left, right));
    items
}

/// Read-only view builder over a [`ProspectStore`].
///
/// Holds no state of its own; every call re-reads the store.
pub struct QueryEngine<'s, R: ProspectRepository> {
    store: &'s ProspectStore<R>,
}

impl<'s, R: ProspectRepository> QueryEngine<'s, R> {
    pub fn new(store: &'s ProspectStore<R>) -> Self {
        Self { store }
    }

    /// Returns the prospects in `filter`, ordered by `sort` with an `id` tiebreak.
    pub fn view(&self, filter: ProspectFilter, sort: SortKey) -> StoreResult<Vec<Prospect>> {
        let items = sort_and_filter(self.store.all()?, filter, sort);
        debug!(
            "event=prospect_view module=query status=ok filter={} sort={} count={}",
            filter.as_str(),
            sort.as_str(),
            items.len()
        );
        Ok(items)
    }
}
