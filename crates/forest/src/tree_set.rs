use grove_util::comparator::partial;

use crate::red_black::RbTree;

/// Ordered set backed by a red-black tree with unit values.
pub struct TreeSet<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    tree: RbTree<T, (), C>,
}

impl<T> TreeSet<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(partial::<T>)
    }
}

impl<T> Default for TreeSet<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for TreeSet<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add(iter);
        set
    }
}

impl<T, C> Extend<T> for TreeSet<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<T, C> TreeSet<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: RbTree::with_comparator(comparator),
        }
    }

    /// Adds one item; `false` when it was already present.
    pub fn insert(&mut self, item: T) -> bool {
        self.tree.put(item, ()).is_none()
    }

    pub fn add<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.tree.put(item, ());
        }
    }

    pub fn remove(&mut self, item: &T) -> bool {
        self.tree.remove(item).is_some()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.tree.contains(item)
    }

    /// `true` when every item is present (vacuously true for none).
    pub fn contains_all(&self, items: &[T]) -> bool {
        items.iter().all(|i| self.contains(i))
    }

    pub fn contains_any(&self, items: &[T]) -> bool {
        items.iter().any(|i| self.contains(i))
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn min(&self) -> Option<&T> {
        self.tree.min().map(|(k, _)| k)
    }

    pub fn max(&self) -> Option<&T> {
        self.tree.max().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.tree.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> Vec<&T> {
        self.iter().collect()
    }

    pub fn range<F: FnMut(&T) -> bool>(&self, mut f: F) {
        self.tree.range(|k, _| f(k));
    }
}

impl<T, C> TreeSet<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> i32 + Clone,
{
    fn empty_like(&self) -> Self {
        Self::with_comparator(self.tree.comparator().clone())
    }

    /// Items present in either set.
    pub fn union(&self, other: &Self) -> Self {
        let mut out = self.empty_like();
        out.add(self.iter().cloned());
        out.add(other.iter().cloned());
        out
    }

    /// Items present in both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut out = self.empty_like();
        out.add(small.iter().filter(|i| large.contains(i)).cloned());
        out
    }

    /// Items of `self` absent from `other`.
    pub fn difference(&self, other: &Self) -> Self {
        let mut out = self.empty_like();
        out.add(self.iter().filter(|i| !other.contains(i)).cloned());
        out
    }
}
