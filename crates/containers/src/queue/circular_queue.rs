/// Fixed-capacity FIFO queue. Enqueueing into a full queue evicts the
/// oldest element.
#[derive(Clone, Debug)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    start: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity.max(1), || None);
        Self {
            slots,
            start: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn slot(&self, offset: usize) -> usize {
        (self.start + offset) % self.slots.len()
    }

    /// Returns the evicted element when the queue was full.
    pub fn enqueue(&mut self, item: T) -> Option<T> {
        if self.is_full() {
            let evicted = self.slots[self.start].replace(item);
            self.start = self.slot(1);
            return evicted;
        }
        let at = self.slot(self.len);
        self.slots[at] = Some(item);
        self.len += 1;
        None
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.slots[self.start].take();
        self.start = self.slot(1);
        self.len -= 1;
        item
    }

    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.start].as_ref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.start = 0;
        self.len = 0;
    }

    /// Items from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.slots[self.slot(i)].as_ref())
    }

    pub fn values(&self) -> Vec<&T> {
        self.iter().collect()
    }
}
