use slab::Slab;

#[derive(Clone, Debug)]
struct Link<T> {
    value: T,
    next: Option<u32>,
}

/// Singly-linked list over an arena with O(1) push at both ends.
#[derive(Clone, Debug)]
pub struct SinglyLinkedList<T> {
    arena: Slab<Link<T>>,
    head: Option<u32>,
    tail: Option<u32>,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            arena: Slab::new(),
            head: None,
            tail: None,
        }
    }

    fn node_at(&self, index: usize) -> Option<u32> {
        let mut curr = self.head;
        for _ in 0..index {
            curr = self.arena[curr? as usize].next;
        }
        curr
    }

    pub fn push_front(&mut self, value: T) {
        let n = self.arena.insert(Link {
            value,
            next: self.head,
        }) as u32;
        if self.tail.is_none() {
            self.tail = Some(n);
        }
        self.head = Some(n);
    }

    pub fn push_back(&mut self, value: T) {
        let n = self.arena.insert(Link { value, next: None }) as u32;
        match self.tail {
            Some(t) => self.arena[t as usize].next = Some(n),
            None => self.head = Some(n),
        }
        self.tail = Some(n);
    }

    /// Appends every item in order.
    pub fn add<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.push_back(item);
        }
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let n = self.head?;
        let link = self.arena.remove(n as usize);
        self.head = link.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(link.value)
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

    /// Inserts before position `index`; `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> bool {
        if index == 0 {
            self.push_front(value);
            return true;
        }
        if index == self.len() {
            self.push_back(value);
            return true;
        }
        let Some(prev) = self.node_at(index - 1) else {
            return false;
        };
        let next = self.arena[prev as usize].next;
        let n = self.arena.insert(Link { value, next }) as u32;
        self.arena[prev as usize].next = Some(n);
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index == 0 {
            return self.pop_front();
        }
        let prev = self.node_at(index - 1)?;
        let n = self.arena[prev as usize].next?;
        let link = self.arena.remove(n as usize);
        self.arena[prev as usize].next = link.next;
        if self.tail == Some(n) {
            self.tail = Some(prev);
        }
        Some(link.value)
    }

    /// Reverses the list in place.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut curr = self.head;
        while let Some(n) = curr {
            curr = self.arena[n as usize].next;
            self.arena[n as usize].next = prev;
            prev = Some(n);
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

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut curr = self.head;
        std::iter::from_fn(move || {
            let link = &self.arena[curr? as usize];
            curr = link.next;
            Some(&link.value)
        })
    }

    pub fn values(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.add(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_follows_removals() {
        let mut list: SinglyLinkedList<i32> = (1..=3).collect();
        assert_eq!(list.remove(2), Some(3));
        assert_eq!(list.back(), Some(&2));
        list.push_back(4);
        assert_eq!(list.values(), vec![&1, &2, &4]);
        assert_eq!(list.remove(3), None);
    }

    #[test]
    fn insert_and_reverse() {
        let mut list: SinglyLinkedList<char> = "ac".chars().collect();
        assert!(list.insert(1, 'b'));
        assert!(list.insert(3, 'd'));
        assert!(!list.insert(9, 'z'));
        list.reverse();
        assert_eq!(list.values(), vec![&'d', &'c', &'b', &'a']);
        assert_eq!(list.front(), Some(&'d'));
        assert_eq!(list.back(), Some(&'a'));
        assert!(list.contains(&'c'));
    }
}
