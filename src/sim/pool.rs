//! Fixed-capacity lifetime pool
//!
//! A slot is occupied while its remaining lifetime is positive. There is no
//! separate "alive" flag: a slot becomes free as soon as its lifetime drops
//! to zero or below, and the next `acquire` is free to reuse it.

use serde::{Deserialize, Serialize};

/// One pool entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Slot<T> {
    /// Seconds left; `<= 0` means the slot is free and `value` is stale
    pub lifetime: f32,
    pub value: T,
}

impl<T> Slot<T> {
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.lifetime > 0.0
    }
}

/// Bounded set of `N` slots, allocated once and reused forever
#[derive(Debug, Clone)]
pub struct LifetimePool<T, const N: usize> {
    slots: [Slot<T>; N],
}

impl<T: Default, const N: usize> Default for LifetimePool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default, const N: usize> LifetimePool<T, N> {
    /// Create a pool with every slot free
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| Slot::default()),
        }
    }
}

impl<T, const N: usize> LifetimePool<T, N> {
    /// Fixed number of slots
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Claim the lowest-index free slot and start its countdown.
    ///
    /// Returns `None` when every slot is occupied; the request is simply
    /// dropped. A non-positive (or NaN) `lifetime` could never occupy a slot
    /// and is dropped the same way.
    pub fn acquire(&mut self, lifetime: f32) -> Option<usize> {
        if !(lifetime > 0.0) {
            return None;
        }
        let index = self.slots.iter().position(|slot| !slot.is_occupied())?;
        self.slots[index].lifetime = lifetime;
        Some(index)
    }

    /// `acquire` and store `value` in the claimed slot
    pub fn insert(&mut self, lifetime: f32, value: T) -> Option<usize> {
        let index = self.acquire(lifetime)?;
        self.slots[index].value = value;
        Some(index)
    }

    /// Count down every occupied slot by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.tick_with(dt, |_| {});
    }

    /// Count down every occupied slot and hand its payload to `f`.
    ///
    /// Occupancy is checked before the decrement, so a slot that expires
    /// during this tick is still visited once.
    pub fn tick_with(&mut self, dt: f32, mut f: impl FnMut(&mut T)) {
        for slot in self.slots.iter_mut().filter(|slot| slot.is_occupied()) {
            slot.lifetime -= dt;
            f(&mut slot.value);
        }
    }

    /// Indices of occupied slots in increasing order
    pub fn occupied(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_occupied())
            .map(|(index, _)| index)
    }

    /// Occupied slots with their indices, in increasing index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Slot<T>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_occupied())
    }

    /// Visit every occupied slot
    pub fn for_each_occupied(&self, mut visitor: impl FnMut(usize, &Slot<T>)) {
        for (index, slot) in self.iter() {
            visitor(index, slot);
        }
    }

    /// Occupied slot at `index` (`None` if free or out of range)
    pub fn get(&self, index: usize) -> Option<&Slot<T>> {
        self.slots.get(index).filter(|slot| slot.is_occupied())
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.slots.iter().any(Slot::is_occupied)
    }

    /// True when the next `acquire` would be dropped
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Slot::is_occupied)
    }
}
