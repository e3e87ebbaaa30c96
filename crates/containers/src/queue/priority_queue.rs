use crate::heap::BinaryHeap;

/// Priority queue: the element with the highest priority (least under
/// `less`) is dequeued first.
#[derive(Clone)]
pub struct PriorityQueue<T, L = fn(&T, &T) -> bool>
where
    L: Fn(&T, &T) -> bool,
{
    heap: BinaryHeap<T, L>,
}

impl<T: PartialOrd> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<T: PartialOrd> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            heap: iter.into_iter().collect(),
        }
    }
}

impl<T, L> PriorityQueue<T, L>
where
    L: Fn(&T, &T) -> bool,
{
    pub fn with_less(less: L) -> Self {
        Self {
            heap: BinaryHeap::with_less(less),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.heap.push(item);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Items in heap storage order.
    pub fn values(&self) -> Vec<&T> {
        self.heap.values()
    }

    pub fn heap(&self) -> &BinaryHeap<T, L> {
        &self.heap
    }
}
