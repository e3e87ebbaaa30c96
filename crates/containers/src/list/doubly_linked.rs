use slab::Slab;

#[derive(Clone, Debug)]
struct Link<T> {
    value: T,
    prev: Option<u32>,
    next: Option<u32>,
}

/// Doubly-linked list over an arena.
///
/// `prev` handles are back-references; a node is owned only through the
/// arena. Removed nodes have both links cleared before their slot is freed.
#[derive(Clone, Debug)]
pub struct DoublyLinkedList<T> {
    arena: Slab<Link<T>>,
    head: Option<u32>,
    tail: Option<u32>,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            arena: Slab::new(),
            head: None,
            tail: None,
        }
    }

    fn link(&mut self, value: T, prev: Option<u32>, next: Option<u32>) -> u32 {
        let n = self.arena.insert(Link { value, prev, next }) as u32;
        match prev {
            Some(p) => self.arena[p as usize].next = Some(n),
            None => self.head = Some(n),
        }
        match next {
            Some(x) => self.arena[x as usize].prev = Some(n),
            None => self.tail = Some(n),
        }
        n
    }

    fn unlink(&mut self, n: u32) -> T {
        let Link { prev, next, .. } = self.arena[n as usize];
        match prev {
            Some(p) => self.arena[p as usize].next = next,
            None => self.head = next,
        }
        match next {
            Some(x) => self.arena[x as usize].prev = prev,
            None => self.tail = prev,
        }
        let link = &mut self.arena[n as usize];
        link.prev = None;
        link.next = None;
        self.arena.remove(n as usize).value
    }

    /// Handle of the node at `index`, walking from the nearer end.
    fn node_at(&self, index: usize) -> Option<u32> {
        let len = self.len();
        if index >= len {
            return None;
        }
        if index < len / 2 {
            let mut curr = self.head?;
            for _ in 0..index {
                curr = self.arena[curr as usize].next?;
            }
            Some(curr)
        } else {
            let mut curr = self.tail?;
            for _ in index + 1..len {
                curr = self.arena[curr as usize].prev?;
            }
            Some(curr)
        }
    }

    pub fn push_back(&mut self, value: T) {
        self.link(value, self.tail, None);
    }

    pub fn push_front(&mut self, value: T) {
        self.link(value, None, self.head);
    }

    /// Appends every item in order.
    pub fn add<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.push_back(item);
        }
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let n = self.head?;
        Some(self.unlink(n))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let n = self.tail?;
        Some(self.unlink(n))
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|n| &self.arena[n as usize].value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|n| &self.arena[n as usize].value)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index).map(|n| &self.arena[n as usize].value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let n = self.node_at(index)?;
        Some(&mut self.arena[n as usize].value)
    }

    /// Inserts before position `index`; `index == len()` appends. Returns
    /// `false` when `index` is out of range.
    pub fn insert(&mut self, index: usize, value: T) -> bool {
        if index == self.len() {
            self.push_back(value);
            return true;
        }
        let Some(next) = self.node_at(index) else {
            return false;
        };
        let prev = self.arena[next as usize].prev;
        self.link(value, prev, Some(next));
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        let n = self.node_at(index)?;
        Some(self.unlink(n))
    }

    /// Reverses the list in place by flipping every link.
    pub fn reverse(&mut self) {
        for (_, link) in self.arena.iter_mut() {
            std::mem::swap(&mut link.prev, &mut link.next);
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    pub fn values(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.add(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let link = &self.list.arena[self.front? as usize];
        self.front = link.next;
        self.remaining -= 1;
        Some(&link.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let link = &self.list.arena[self.back? as usize];
        self.back = link.prev;
        self.remaining -= 1;
        Some(&link.value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
