//! Collects the unique cards across all of a user's decks.

use crate::api::DeckSource;
use crate::cache::naming::is_valid_card_id;
use crate::error::Result;
use crate::models::DesiredSet;
use crate::throttle::Throttle;

/// Build the desired set from the mainboards of the user's first page of
/// decks. Each request is preceded by `throttle.wait()`.
pub fn aggregate<D: DeckSource + ?Sized>(
    decks: &D,
    username: &str,
    throttle: &Throttle,
) -> Result<DesiredSet> {
    throttle.wait();
    let summaries = decks.user_decks(username)?;
    log::info!("Found {} decks for {}", summaries.len(), username);

    let mut desired = DesiredSet::new();

    for summary in &summaries {
        throttle.wait();
        let deck = decks.deck(&summary.public_id)?;

        let mut added = 0;
        for entry in deck.mainboard.values() {
            if !is_valid_card_id(&entry.card.scryfall_id) {
                log::warn!(
                    "Skipping {} in deck {}: unusable card id {:?}",
                    entry.card.name,
                    summary.public_id,
                    entry.card.scryfall_id
                );
                continue;
            }
            if desired.insert_first(&entry.card.scryfall_id, &entry.card.name) {
                added += 1;
            }
        }

        log::info!(
            "Deck \"{}\" ({}): {} mainboard entries, {} new cards",
            summary.name,
            summary.public_id,
            deck.mainboard.len(),
            added
        );
    }

    log::info!("{} unique cards across all decks", desired.len());
    Ok(desired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BoardEntry, Deck, DeckCard, DeckSummary};
    use crate::error::CacheError;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, HashMap};
    use std::time::{Duration, Instant};

    #[derive(Default)]
    struct FakeDecks {
        user_exists: bool,
        decks: Vec<(DeckSummary, Deck)>,
        detail_calls: RefCell<Vec<String>>,
        request_times: RefCell<Vec<Instant>>,
    }

    impl FakeDecks {
        fn with_decks(decks: Vec<(&str, Vec<(&str, &str, &str)>)>) -> Self {
            let decks = decks
                .into_iter()
                .map(|(id, entries)| {
                    let mainboard: BTreeMap<String, BoardEntry> = entries
                        .into_iter()
                        .map(|(key, card_id, name)| {
                            (
                                key.to_string(),
                                BoardEntry {
                                    quantity: 1,
                                    card: DeckCard {
                                        scryfall_id: card_id.to_string(),
                                        name: name.to_string(),
                                    },
                                },
                            )
                        })
                        .collect();
                    (
                        DeckSummary {
                            public_id: id.to_string(),
                            name: format!("Deck {id}"),
                        },
                        Deck { mainboard },
                    )
                })
                .collect();
            Self {
                user_exists: true,
                decks,
                ..Default::default()
            }
        }
    }

    impl DeckSource for FakeDecks {
        fn user_decks(&self, username: &str) -> Result<Vec<DeckSummary>> {
            self.request_times.borrow_mut().push(Instant::now());
            if !self.user_exists {
                return Err(CacheError::UserNotFound(username.to_string()));
            }
            Ok(self.decks.iter().map(|(s, _)| s.clone()).collect())
        }

        fn deck(&self, public_id: &str) -> Result<Deck> {
            self.request_times.borrow_mut().push(Instant::now());
            self.detail_calls.borrow_mut().push(public_id.to_string());
            let by_id: HashMap<_, _> = self
                .decks
                .iter()
                .map(|(s, d)| (s.public_id.as_str(), d))
                .collect();
            Ok(by_id[public_id].clone())
        }
    }

    #[test]
    fn test_union_of_mainboards() {
        let decks = FakeDecks::with_decks(vec![
            ("d1", vec![("Lightning Bolt", "bolt", "Lightning Bolt")]),
            ("d2", vec![("Counterspell", "counter", "Counterspell")]),
        ]);

        let desired = aggregate(&decks, "alice", &Throttle::none()).unwrap();

        assert_eq!(desired.len(), 2);
        assert_eq!(desired.name("bolt"), Some("Lightning Bolt"));
        assert_eq!(desired.name("counter"), Some("Counterspell"));
        assert_eq!(*decks.detail_calls.borrow(), vec!["d1", "d2"]);
    }

    #[test]
    fn test_card_in_two_decks_is_listed_once() {
        let decks = FakeDecks::with_decks(vec![
            ("d1", vec![("Sol Ring", "sol", "Sol Ring")]),
            ("d2", vec![("Sol Ring", "sol", "Sol Ring (Foil)")]),
        ]);

        let desired = aggregate(&decks, "alice", &Throttle::none()).unwrap();

        assert_eq!(desired.len(), 1);
        assert_eq!(desired.name("sol"), Some("Sol Ring"));
    }

    #[test]
    fn test_same_id_twice_in_one_mainboard() {
        let decks = FakeDecks::with_decks(vec![(
            "d1",
            vec![
                ("Forest", "forest-id", "Forest"),
                ("Forest (2)", "forest-id", "Forest"),
            ],
        )]);

        let desired = aggregate(&decks, "alice", &Throttle::none()).unwrap();

        assert_eq!(desired.len(), 1);
        assert!(desired.contains("forest-id"));
    }

    #[test]
    fn test_zero_decks_makes_no_detail_calls() {
        let decks = FakeDecks::with_decks(vec![]);

        let desired = aggregate(&decks, "alice", &Throttle::none()).unwrap();

        assert!(desired.is_empty());
        assert!(decks.detail_calls.borrow().is_empty());
    }

    #[test]
    fn test_ids_unusable_in_file_names_are_skipped() {
        let decks = FakeDecks::with_decks(vec![(
            "d1",
            vec![
                ("Lightning Bolt", "bolt", "Lightning Bolt"),
                ("Broken", "has space", "Broken"),
                ("Empty", "", "Empty"),
                ("Slashed", "a/b", "Slashed"),
            ],
        )]);

        let desired = aggregate(&decks, "alice", &Throttle::none()).unwrap();

        assert_eq!(desired.len(), 1);
        assert!(desired.contains("bolt"));
    }

    #[test]
    fn test_every_request_is_paced() {
        let interval = Duration::from_millis(30);
        let decks = FakeDecks::with_decks(vec![
            ("d1", vec![("Lightning Bolt", "bolt", "Lightning Bolt")]),
            ("d2", vec![("Counterspell", "counter", "Counterspell")]),
        ]);

        let start = Instant::now();
        aggregate(&decks, "alice", &Throttle::new(interval)).unwrap();

        // One listing plus one detail request per deck
        let times = decks.request_times.borrow();
        assert_eq!(times.len(), 3);
        assert!(times[0] - start >= interval);
        for pair in times.windows(2) {
            assert!(pair[1] - pair[0] >= interval);
        }
    }

    #[test]
    fn test_unknown_user_propagates() {
        let decks = FakeDecks::default();

        match aggregate(&decks, "ghost", &Throttle::none()) {
            Err(CacheError::UserNotFound(name)) => assert_eq!(name, "ghost"),
            other => panic!("Expected UserNotFound, got: {other:?}"),
        }
    }
}
