/// Double-ended queue over a growable ring buffer.
#[derive(Clone, Debug)]
pub struct Deque<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

const INITIAL_CAPACITY: usize = 8;

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity.max(1), || None);
        Self {
            slots,
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.head + index) % self.slots.len()
    }

    /// Doubles the ring, unrolling it so the head lands at slot 0.
    fn grow(&mut self) {
        let capacity = self.slots.len() * 2;
        let mut slots = Vec::with_capacity(capacity);
        for i in 0..self.len {
            let at = self.physical(i);
            slots.push(self.slots[at].take());
        }
        slots.resize_with(capacity, || None);
        self.slots = slots;
        self.head = 0;
    }

    pub fn push_back(&mut self, item: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        let at = self.physical(self.len);
        self.slots[at] = Some(item);
        self.len += 1;
    }

    pub fn push_front(&mut self, item: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        self.head = (self.head + self.slots.len() - 1) % self.slots.len();
        self.slots[self.head] = Some(item);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = self.physical(1);
        self.len -= 1;
        item
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let at = self.physical(self.len);
        self.slots[at].take()
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.physical(index)].as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let at = self.physical(index);
        self.slots[at].as_mut()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.head = 0;
        self.len = 0;
    }

    /// Items from front to back.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    pub fn values(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        for item in iter {
            deque.push_back(item);
        }
        deque
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_across_the_wrap() {
        let mut deque = Deque::with_capacity(2);
        deque.push_back(2);
        deque.push_front(1);
        deque.push_front(0);
        deque.push_back(3);
        assert!(deque.capacity() >= 4);
        assert_eq!(deque.values(), vec![&0, &1, &2, &3]);
        assert_eq!(deque.pop_back(), Some(3));
        assert_eq!(deque.pop_front(), Some(0));
        assert_eq!(deque.front(), Some(&1));
        assert_eq!(deque.back(), Some(&2));
        assert_eq!(deque.iter().rev().next(), Some(&2));
    }
}
