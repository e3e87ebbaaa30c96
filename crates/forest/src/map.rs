/// Common surface of the ordered indexes.
///
/// Every structure in this crate keeps its own inherent methods; this trait
/// lets generic code (and the container-law tests) treat them alike.
pub trait OrderedMap<K, V> {
    /// Inserts or replaces; returns the replaced value.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    fn get(&self, key: &K) -> Option<&V>;

    fn get_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Removes the entry; returns its value.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Number of distinct keys.
    fn len(&self) -> usize;

    fn clear(&mut self);

    fn min(&self) -> Option<(&K, &V)>;

    fn max(&self) -> Option<(&K, &V)>;

    /// Visits entries in key order until `f` returns `false`.
    fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a K, &'a V) -> bool);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// `true` when every key is present (vacuously true for no keys).
    fn contains_all(&self, keys: &[K]) -> bool {
        keys.iter().all(|k| self.contains(k))
    }

    /// `true` when at least one key is present.
    fn contains_any(&self, keys: &[K]) -> bool {
        keys.iter().any(|k| self.contains(k))
    }

    fn range<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
        Self: Sized,
    {
        self.visit(&mut |k, v| f(k, v));
    }

    fn keys<'a>(&'a self) -> Vec<&'a K>
    where
        V: 'a,
    {
        let mut out = Vec::with_capacity(self.len());
        self.visit(&mut |k, _| {
            out.push(k);
            true
        });
        out
    }

    fn values<'a>(&'a self) -> Vec<&'a V>
    where
        K: 'a,
    {
        let mut out = Vec::with_capacity(self.len());
        self.visit(&mut |_, v| {
            out.push(v);
            true
        });
        out
    }

    fn entries(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.len());
        self.visit(&mut |k, v| {
            out.push((k, v));
            true
        });
        out
    }
}

/// Forwards [`OrderedMap`] to the inherent methods of the same names.
macro_rules! impl_ordered_map {
    ($ty:ident) => {
        impl<K, V, C> $crate::map::OrderedMap<K, V> for $ty<K, V, C>
        where
            C: Fn(&K, &K) -> i32,
        {
            fn put(&mut self, key: K, value: V) -> Option<V> {
                $ty::put(self, key, value)
            }

            fn get(&self, key: &K) -> Option<&V> {
                $ty::get(self, key)
            }

            fn get_mut(&mut self, key: &K) -> Option<&mut V> {
                $ty::get_mut(self, key)
            }

            fn remove(&mut self, key: &K) -> Option<V> {
                $ty::remove(self, key)
            }

            fn len(&self) -> usize {
                $ty::len(self)
            }

            fn clear(&mut self) {
                $ty::clear(self)
            }

            fn min(&self) -> Option<(&K, &V)> {
                $ty::min(self)
            }

            fn max(&self) -> Option<(&K, &V)> {
                $ty::max(self)
            }

            fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a K, &'a V) -> bool) {
                for (k, v) in self.iter() {
                    if !f(k, v) {
                        break;
                    }
                }
            }
        }
    };
}

pub(crate) use impl_ordered_map;
