/// Fixed-capacity ring. Unlike [`CircularQueue`](crate::CircularQueue),
/// pushing into a full ring fails and hands the item back.
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    read: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity.max(1), || None);
        Self {
            slots,
            read: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        let write = (self.read + self.len) % self.slots.len();
        self.slots[write] = Some(item);
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.slots[self.read].take();
        self.read = (self.read + 1) % self.slots.len();
        self.len -= 1;
        item
    }

    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.read].as_ref()
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
        self.read = 0;
        self.len = 0;
    }

    /// Items from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.slots[(self.read + i) % self.slots.len()].as_ref())
    }

    pub fn values(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_on_full_fails() {
        let mut ring = RingBuffer::new(2);
        assert_eq!(ring.push('a'), Ok(()));
        assert_eq!(ring.push('b'), Ok(()));
        assert_eq!(ring.push('c'), Err('c'));
        assert_eq!(ring.pop(), Some('a'));
        assert_eq!(ring.push('c'), Ok(()));
        assert_eq!(ring.values(), vec![&'b', &'c']);
    }
}
