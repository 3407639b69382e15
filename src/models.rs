use std::collections::BTreeMap;

/// Cards a user's decks currently reference: Scryfall id -> display name.
///
/// Iteration is in card-id order so runs process cards deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesiredSet {
    cards: BTreeMap<String, String>,
}

impl DesiredSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a card unless its id is already present. The first name seen
    /// for an id wins. Returns whether the card was new.
    pub fn insert_first(&mut self, card_id: &str, display_name: &str) -> bool {
        if self.cards.contains_key(card_id) {
            return false;
        }
        self.cards
            .insert(card_id.to_string(), display_name.to_string());
        true
    }

    pub fn contains(&self, card_id: &str) -> bool {
        self.cards.contains_key(card_id)
    }

    /// Remove a card, returning its display name if it was present
    pub fn remove(&mut self, card_id: &str) -> Option<String> {
        self.cards.remove(card_id)
    }

    pub fn name(&self, card_id: &str) -> Option<&str> {
        self.cards.get(card_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// `(card_id, display_name)` pairs in card-id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cards.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for DesiredSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (id, name) in iter {
            set.insert_first(id, name);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_wins() {
        let mut set = DesiredSet::new();
        assert!(set.insert_first("id-1", "Lightning Bolt"));
        assert!(!set.insert_first("id-1", "Bolt (alt name)"));
        assert_eq!(set.len(), 1);
        assert_eq!(set.name("id-1"), Some("Lightning Bolt"));
    }

    #[test]
    fn test_remove() {
        let mut set: DesiredSet = [("a", "A"), ("b", "B")].into_iter().collect();
        assert_eq!(set.remove("a").as_deref(), Some("A"));
        assert_eq!(set.remove("a"), None);
        assert!(!set.contains("a"));
        assert!(set.contains("b"));
    }

    #[test]
    fn test_iter_is_ordered_by_id() {
        let set: DesiredSet = [("c", "C"), ("a", "A"), ("b", "B")].into_iter().collect();
        let ids: Vec<&str> = set.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
