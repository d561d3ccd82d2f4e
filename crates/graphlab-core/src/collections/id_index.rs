use std::collections::HashMap;

/// Bidirectional mapping between string ids and sequentially assigned indices.
///
/// Indices are handed out in insertion order starting at zero and are never
/// reused, so an index stays valid for the lifetime of the mapping.
#[derive(Debug, Clone, Default)]
pub struct IdIndex {
    ids: Vec<String>,
    positions: HashMap<String, usize>,
}

impl IdIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` and return its index, or `None` if it is already present.
    pub fn insert(&mut self, id: &str) -> Option<usize> {
        if self.positions.contains_key(id) {
            return None;
        }
        let index = self.ids.len();
        self.ids.push(id.to_string());
        self.positions.insert(id.to_string(), index);
        Some(index)
    }

    pub fn get(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn id_of(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_insertion_order() {
        let mut index = IdIndex::new();
        assert_eq!(index.insert("start"), Some(0));
        assert_eq!(index.insert("A"), Some(1));
        assert_eq!(index.insert("B"), Some(2));

        assert_eq!(index.get("A"), Some(1));
        assert_eq!(index.id_of(2), Some("B"));
        assert_eq!(index.iter().collect::<Vec<_>>(), vec!["start", "A", "B"]);
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let mut index = IdIndex::new();
        index.insert("A");
        assert_eq!(index.insert("A"), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_missing_lookups() {
        let index = IdIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.get("Z"), None);
        assert_eq!(index.id_of(0), None);
        assert!(!index.contains("Z"));
    }
}
