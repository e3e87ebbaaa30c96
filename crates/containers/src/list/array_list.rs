use grove_util::comparator::to_ordering;

/// Growable array-backed list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayList<T> {
    items: Vec<T>,
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Appends every item in order.
    pub fn add<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.items.extend(items);
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Overwrites the item at `index`; returns the old one. An index equal
    /// to `len()` appends.
    pub fn set(&mut self, index: usize, item: T) -> Option<T> {
        if index == self.items.len() {
            self.items.push(item);
            return None;
        }
        self.items
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, item))
    }

    /// Inserts the items starting at `index`. Out-of-range indexes are
    /// ignored and `false` is returned.
    pub fn insert<I: IntoIterator<Item = T>>(&mut self, index: usize, items: I) -> bool {
        if index > self.items.len() {
            return false;
        }
        self.items.splice(index..index, items);
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.items.len() || b >= self.items.len() {
            return false;
        }
        self.items.swap(a, b);
        true
    }

    /// Stable sort with an `i32` comparator.
    pub fn sort_by<C: Fn(&T, &T) -> i32>(&mut self, comparator: C) {
        self.items.sort_by(|a, b| to_ordering(comparator(a, b)));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn values(&self) -> Vec<&T> {
        self.items.iter().collect()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> ArrayList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }

    /// `true` when every item is present (vacuously true for none).
    pub fn contains(&self, items: &[T]) -> bool {
        items.iter().all(|i| self.items.contains(i))
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grove_util::comparator::natural;

    #[test]
    fn insert_set_remove() {
        let mut list: ArrayList<char> = "ad".chars().collect();
        assert!(list.insert(1, ['b', 'c']));
        assert!(!list.insert(9, ['x']));
        assert_eq!(list.set(4, 'e'), None);
        assert_eq!(list.set(0, 'A'), Some('a'));
        assert_eq!(list.remove(1), Some('b'));
        assert_eq!(list.remove(10), None);
        assert_eq!(list.as_slice(), &['A', 'c', 'd', 'e']);
        assert_eq!(list.index_of(&'d'), Some(2));
        assert!(list.contains(&['c', 'e']));
    }

    #[test]
    fn sorts_with_comparator() {
        let mut list: ArrayList<i32> = [3, 1, 2].into_iter().collect();
        list.sort_by(natural);
        assert_eq!(list.values(), vec![&1, &2, &3]);
    }
}
