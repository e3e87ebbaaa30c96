use grove_util::comparator::less_from;

/// Binary heap ordered by a `less` predicate; the least element is on top.
///
/// Storage order (what `as_slice` and serialization expose) is the array
/// layout of the heap, not pop order.
#[derive(Clone)]
pub struct BinaryHeap<T, L = fn(&T, &T) -> bool>
where
    L: Fn(&T, &T) -> bool,
{
    items: Vec<T>,
    less: L,
}

impl<T: PartialOrd> BinaryHeap<T> {
    /// Min-heap over the natural order.
    pub fn new() -> Self {
        Self::with_less(|a: &T, b: &T| a < b)
    }
}

impl<T: PartialOrd> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.items = iter.into_iter().collect();
        heap.heapify();
        heap
    }
}

impl<T, L> BinaryHeap<T, L>
where
    L: Fn(&T, &T) -> bool,
{
    pub fn with_less(less: L) -> Self {
        Self {
            items: Vec::new(),
            less,
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Pushes every item, then restores the heap in one pass.
    pub fn add<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.items.extend(items);
        self.heapify();
    }

    pub fn pop(&mut self) -> Option<T> {
        let last = self.items.len().checked_sub(1)?;
        self.items.swap(0, last);
        let top = self.items.pop();
        self.sift_down(0);
        top
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.first()
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

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn values(&self) -> Vec<&T> {
        self.items.iter().collect()
    }

    /// Drains the heap in pop order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Some(item) = self.pop() {
            out.push(item);
        }
        out
    }

    fn heapify(&mut self) {
        for i in (0..self.items.len() / 2).rev() {
            self.sift_down(i);
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !(self.less)(&self.items[i], &self.items[parent]) {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let (l, r) = (2 * i + 1, 2 * i + 2);
            let mut top = i;
            if l < len && (self.less)(&self.items[l], &self.items[top]) {
                top = l;
            }
            if r < len && (self.less)(&self.items[r], &self.items[top]) {
                top = r;
            }
            if top == i {
                return;
            }
            self.items.swap(i, top);
            i = top;
        }
    }
}

/// Heap ordered by an `i32` comparator instead of a `less` predicate.
pub fn heap_with_comparator<T, C>(comparator: C) -> BinaryHeap<T, impl Fn(&T, &T) -> bool>
where
    C: Fn(&T, &T) -> i32,
{
    BinaryHeap::with_less(less_from(comparator))
}
