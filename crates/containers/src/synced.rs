use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Serialize, Serializer};
use tracing::trace;

/// Reader-writer lock around any container.
///
/// Reads take shared access and writes take exclusive access. The lock is
/// held only for the duration of the closure or guard, never across calls.
#[derive(Debug, Default)]
pub struct Synced<C> {
    inner: RwLock<C>,
}

impl<C> Synced<C> {
    pub fn new(container: C) -> Self {
        trace!(
            container = std::any::type_name::<C>(),
            "synced container created"
        );
        Self {
            inner: RwLock::new(container),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.inner.read())
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        f(&mut self.inner.write())
    }

    pub fn read_guard(&self) -> RwLockReadGuard<'_, C> {
        self.inner.read()
    }

    pub fn write_guard(&self) -> RwLockWriteGuard<'_, C> {
        self.inner.write()
    }

    pub fn get_mut(&mut self) -> &mut C {
        self.inner.get_mut()
    }

    pub fn into_inner(self) -> C {
        self.inner.into_inner()
    }
}

impl<C> From<C> for Synced<C> {
    fn from(container: C) -> Self {
        Self::new(container)
    }
}

impl<C: Serialize> Serialize for Synced<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.read().serialize(serializer)
    }
}
