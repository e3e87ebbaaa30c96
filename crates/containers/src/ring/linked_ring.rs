use slab::Slab;

#[derive(Clone, Debug)]
struct Link<T> {
    value: T,
    prev: u32,
    next: u32,
}

/// Circular doubly-linked ring with a cursor.
///
/// There is no head: every operation is relative to the element under the
/// cursor. `prev` handles are back-references and are cleared on removal.
#[derive(Clone, Debug)]
pub struct LinkedRing<T> {
    arena: Slab<Link<T>>,
    cursor: Option<u32>,
}

impl<T> Default for LinkedRing<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedRing<T> {
    pub fn new() -> Self {
        Self {
            arena: Slab::new(),
            cursor: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.cursor = None;
    }

    /// Element under the cursor.
    pub fn value(&self) -> Option<&T> {
        self.cursor.map(|c| &self.arena[c as usize].value)
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        let c = self.cursor?;
        Some(&mut self.arena[c as usize].value)
    }

    /// Moves the cursor one step forward and returns the new current element.
    pub fn next(&mut self) -> Option<&T> {
        self.move_by(1)
    }

    /// Moves the cursor one step backward and returns the new current element.
    pub fn prev(&mut self) -> Option<&T> {
        self.move_by(-1)
    }

    /// Moves the cursor `n` steps, backward when `n` is negative.
    pub fn move_by(&mut self, n: isize) -> Option<&T> {
        let mut c = self.cursor?;
        let steps = n.unsigned_abs() % self.len();
        for _ in 0..steps {
            let link = &self.arena[c as usize];
            c = if n > 0 { link.next } else { link.prev };
        }
        self.cursor = Some(c);
        self.value()
    }

    /// Inserts `value` right after the cursor. The first insertion into an
    /// empty ring places the cursor on it; later ones leave it in place.
    pub fn insert_after(&mut self, value: T) {
        let Some(c) = self.cursor else {
            let n = self.arena.vacant_key() as u32;
            self.arena.insert(Link {
                value,
                prev: n,
                next: n,
            });
            self.cursor = Some(n);
            return;
        };
        let next = self.arena[c as usize].next;
        let n = self.arena.insert(Link {
            value,
            prev: c,
            next,
        }) as u32;
        self.arena[c as usize].next = n;
        self.arena[next as usize].prev = n;
    }

    /// Inserts `value` right before the cursor, i.e. at the ring's "end"
    /// when the cursor is read as its start.
    pub fn insert_before(&mut self, value: T) {
        match self.cursor {
            None => self.insert_after(value),
            Some(c) => {
                let prev = self.arena[c as usize].prev;
                self.cursor = Some(prev);
                self.insert_after(value);
                self.cursor = Some(c);
            }
        }
    }

    /// Removes the `n` elements following the cursor and returns them in
    /// ring order. The cursor element itself is never removed.
    pub fn unlink(&mut self, n: usize) -> Vec<T> {
        let Some(c) = self.cursor else {
            return Vec::new();
        };
        let n = n.min(self.len() - 1);
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            let victim = self.arena[c as usize].next;
            out.push(self.detach(victim));
        }
        out
    }

    /// Removes the element under the cursor; the cursor moves to its successor.
    pub fn remove(&mut self) -> Option<T> {
        let c = self.cursor?;
        let next = self.arena[c as usize].next;
        self.cursor = (next != c).then_some(next);
        Some(self.detach(c))
    }

    fn detach(&mut self, n: u32) -> T {
        let Link { prev, next, .. } = self.arena[n as usize];
        self.arena[prev as usize].next = next;
        self.arena[next as usize].prev = prev;
        self.arena.remove(n as usize).value
    }

    /// One full turn starting at the cursor.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut curr = self.cursor;
        let mut remaining = self.len();
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            let link = &self.arena[curr? as usize];
            remaining -= 1;
            curr = Some(link.next);
            Some(&link.value)
        })
    }

    pub fn values(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T> FromIterator<T> for LinkedRing<T> {
    /// Items keep their order; the cursor rests on the first one.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Self::new();
        for item in iter {
            ring.insert_before(item);
        }
        ring
    }
}
