//! Property-based tests for link ordering.
//!
//! Adding links to a category assigns consecutive display positions
//! starting at 1, regardless of how the adds are interleaved across
//! categories.

use linkhub::managers::link_store::{LinkStore, LinkStoreTrait};
use linkhub::storage::{LinkRepository, MemoryStorage};
use linkhub::types::link::LinkDraft;
use proptest::prelude::*;

const CATEGORIES: &[&str] = &["Mobiles", "Fashion", "Electronics"];

/// Strategy: a sequence of (category index, title) pairs.
fn arb_adds() -> impl Strategy<Value = Vec<(usize, String)>> {
    proptest::collection::vec((0..CATEGORIES.len(), "[a-zA-Z][a-zA-Z0-9 ]{0,20}"), 1..25)
}

fn fresh_store() -> LinkStore {
    let repo = LinkRepository::new(Box::new(MemoryStorage::new()));
    LinkStore::load(repo).expect("Failed to load store")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // For any interleaving of adds, each category's links sort into their
    // insertion order and the Nth add to a category gets position
    // (seeded count + N).
    #[test]
    fn add_sequence_yields_consecutive_orders(adds in arb_adds()) {
        let mut store = fresh_store();

        // Seeded baseline: Mobiles and Fashion each start with one link
        let mut expected: Vec<Vec<String>> = CATEGORIES
            .iter()
            .map(|c| {
                store
                    .links_in_category(c)
                    .iter()
                    .map(|l| l.id.clone())
                    .collect()
            })
            .collect();

        for (cat_idx, title) in &adds {
            let id = store
                .add_link(LinkDraft {
                    title: title.clone(),
                    url: "https://example.com/item".to_string(),
                    category: CATEGORIES[*cat_idx].to_string(),
                    image_url: None,
                    description: None,
                })
                .expect("add_link should succeed");
            expected[*cat_idx].push(id);
        }

        for (cat_idx, category) in CATEGORIES.iter().enumerate() {
            let links = store.links_in_category(category);

            let ids: Vec<String> = links.iter().map(|l| l.id.clone()).collect();
            prop_assert_eq!(&ids, &expected[cat_idx], "insertion order in {}", category);

            let orders: Vec<i64> = links.iter().map(|l| l.order).collect();
            let consecutive: Vec<i64> = (1..=links.len() as i64).collect();
            prop_assert_eq!(orders, consecutive, "orders in {}", category);
        }
    }

    // Every add persists immediately: total link count equals seeds + adds.
    #[test]
    fn add_sequence_grows_the_collection(adds in arb_adds()) {
        let mut store = fresh_store();
        let seeded = store.links().len();

        for (cat_idx, title) in &adds {
            store
                .add_link(LinkDraft {
                    title: title.clone(),
                    url: "https://example.com/item".to_string(),
                    category: CATEGORIES[*cat_idx].to_string(),
                    image_url: None,
                    description: None,
                })
                .expect("add_link should succeed");
        }

        prop_assert_eq!(store.links().len(), seeded + adds.len());

        let counts = store.link_counts();
        let total: usize = counts.values().sum();
        prop_assert_eq!(total, seeded + adds.len());
    }
}
