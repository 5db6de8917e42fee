use hotprospects_core::db::open_db_in_memory;
use hotprospects_core::{
    InMemoryProspectRepository, Prospect, ProspectFilter, ProspectListQuery, ProspectRepository,
    ProspectStore, QueryEngine, SortKey, SqliteProspectRepository,
};
use std::collections::HashSet;
use uuid::Uuid;

const FILTERS: [ProspectFilter; 3] = [
    ProspectFilter::All,
    ProspectFilter::Contacted,
    ProspectFilter::Uncontacted,
];
const SORTS: [SortKey; 2] = [SortKey::Name, SortKey::DateAdded];

/// Fixture with duplicate names, duplicate timestamps, and mixed case.
fn fixture() -> Vec<Prospect> {
    let rows: [(u128, &str, i64, bool); 8] = [
        (8, "bob", 300, false),
        (3, "Bob", 100, true),
        (5, "Bob", 100, false),
        (1, "alice", 200, true),
        (7, "Zed", 100, true),
        (2, "Émile", 50, false),
        (6, "alice", 200, false),
        (4, "Carol", 300, true),
    ];
    rows.iter()
        .map(|&(id, name, date_added, is_contacted)| {
            let mut prospect =
                Prospect::with_id(Uuid::from_u128(id), name, "x@example.com", date_added)
                    .unwrap();
            prospect.is_contacted = is_contacted;
            prospect
        })
        .collect()
}

fn seeded<R: ProspectRepository>(mut repo: R) -> ProspectStore<R> {
    for prospect in fixture() {
        repo.insert_prospect(&prospect).unwrap();
    }
    ProspectStore::new(repo)
}

fn ids(items: &[Prospect]) -> Vec<u128> {
    items.iter().map(|p| p.id.as_u128()).collect()
}

#[test]
fn name_sort_orders_by_bytes_then_id() {
    let store = seeded(InMemoryProspectRepository::new());
    let view = QueryEngine::new(&store)
        .view(ProspectFilter::All, SortKey::Name)
        .unwrap();

    // Uppercase ASCII < lowercase ASCII < non-ASCII.
    assert_eq!(ids(&view), vec![3, 5, 4, 7, 1, 6, 8, 2]);
}

#[test]
fn date_sort_orders_chronologically_then_id() {
    let store = seeded(InMemoryProspectRepository::new());
    let view = QueryEngine::new(&store)
        .view(ProspectFilter::All, SortKey::DateAdded)
        .unwrap();

    assert_eq!(ids(&view), vec![2, 3, 5, 7, 1, 6, 4, 8]);
}

#[test]
fn sort_is_non_decreasing_for_every_filter() {
    let store = seeded(InMemoryProspectRepository::new());
    let engine = QueryEngine::new(&store);

    for filter in FILTERS {
        for sort in SORTS {
            let view = engine.view(filter, sort).unwrap();
            for pair in view.windows(2) {
                assert!(
                    sort.compare(&pair[0], &pair[1]).is_lt(),
                    "{filter:?}/{sort:?} out of order"
                );
            }
        }
    }
}

#[test]
fn contacted_and_uncontacted_partition_all() {
    let store = seeded(InMemoryProspectRepository::new());
    let engine = QueryEngine::new(&store);

    for sort in SORTS {
        let all: HashSet<Uuid> = engine
            .view(ProspectFilter::All, sort)
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        let contacted: HashSet<Uuid> = engine
            .view(ProspectFilter::Contacted, sort)
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        let uncontacted: HashSet<Uuid> = engine
            .view(ProspectFilter::Uncontacted, sort)
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();

        assert!(contacted.is_disjoint(&uncontacted));
        let union: HashSet<Uuid> = contacted.union(&uncontacted).copied().collect();
        assert_eq!(union, all);

        let stored: HashSet<Uuid> = store.all().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(all, stored);
    }
}

#[test]
fn repeated_views_are_identical() {
    let store = seeded(InMemoryProspectRepository::new());
    let engine = QueryEngine::new(&store);

    for filter in FILTERS {
        for sort in SORTS {
            assert_eq!(engine.view(filter, sort).unwrap(), engine.view(filter, sort).unwrap());
        }
    }
}

#[test]
fn view_reflects_mutations_between_calls() {
    let store = seeded(InMemoryProspectRepository::new());
    let engine = QueryEngine::new(&store);
    let before = engine
        .view(ProspectFilter::Contacted, SortKey::Name)
        .unwrap();

    store.toggle_contacted(Uuid::from_u128(8)).unwrap();
    store.delete_one(Uuid::from_u128(3)).unwrap();

    let after = engine
        .view(ProspectFilter::Contacted, SortKey::Name)
        .unwrap();
    assert_eq!(ids(&before), vec![3, 4, 7, 1]);
    assert_eq!(ids(&after), vec![4, 7, 1, 8]);
}

#[test]
fn sqlite_push_down_matches_in_memory_ordering() {
    let memory = seeded(InMemoryProspectRepository::new());
    let sqlite = seeded(SqliteProspectRepository::new(open_db_in_memory().unwrap()));

    for filter in FILTERS {
        for sort in SORTS {
            let expected = QueryEngine::new(&memory).view(filter, sort).unwrap();
            let pushed_down = sqlite.list(&ProspectListQuery::sorted(filter, sort)).unwrap();
            let engine_view = QueryEngine::new(&sqlite).view(filter, sort).unwrap();

            assert_eq!(ids(&pushed_down), ids(&expected), "{filter:?}/{sort:?}");
            assert_eq!(engine_view, expected, "{filter:?}/{sort:?}");
        }
    }
}

#[test]
fn empty_store_yields_empty_views() {
    let store = ProspectStore::new(InMemoryProspectRepository::new());
    let engine = QueryEngine::new(&store);

    for filter in FILTERS {
        assert!(engine.view(filter, SortKey::Name).unwrap().is_empty());
    }
}
