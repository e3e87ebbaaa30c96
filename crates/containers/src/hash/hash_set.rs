use std::collections::hash_set;
use std::hash::Hash;

/// Unordered set. Iteration order is unspecified.
#[derive(Clone, Debug)]
pub struct HashSet<T> {
    table: hash_set::HashSet<T>,
}

impl<T> Default for HashSet<T> {
    fn default() -> Self {
        Self {
            table: hash_set::HashSet::new(),
        }
    }
}

impl<T: Eq + Hash> HashSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one item; `false` when it was already present.
    pub fn insert(&mut self, item: T) -> bool {
        self.table.insert(item)
    }

    pub fn add<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.table.extend(items);
    }

    pub fn remove(&mut self, item: &T) -> bool {
        self.table.remove(item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.table.contains(item)
    }

    /// `true` when every item is present (vacuously true for none).
    pub fn contains_all(&self, items: &[T]) -> bool {
        items.iter().all(|i| self.table.contains(i))
    }

    pub fn contains_any(&self, items: &[T]) -> bool {
        items.iter().any(|i| self.table.contains(i))
    }
}

impl<T> HashSet<T> {
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.table.iter()
    }

    pub fn values(&self) -> Vec<&T> {
        self.table.iter().collect()
    }
}

impl<T: Eq + Hash> FromIterator<T> for HashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            table: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for HashSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership() {
        let mut set: HashSet<u8> = [1, 2, 3].into_iter().collect();
        assert!(!set.insert(2));
        assert!(set.remove(&1));
        assert!(!set.remove(&1));
        assert!(set.contains_all(&[2, 3]));
        assert!(!set.contains_any(&[1, 9]));
        assert!(set.contains_all(&[]));
        assert_eq!(set.len(), 2);
    }
}
