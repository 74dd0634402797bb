//! Fixed-Capacity Entity Pool
//!
//! Arena-style slot array reused via an active flag. Slots are created once
//! at pool construction and never added or removed afterwards, so the
//! per-frame hot path allocates nothing. A slot's index is its stable
//! identity for the whole run; only payload fields are overwritten on
//! reactivation. Payload of an inactive slot is stale and must not be read.

/// Contract a pooled entity record implements.
pub trait PoolSlot {
    /// Build an inactive slot carrying its stable index.
    fn inactive(id: usize) -> Self;
    /// Whether the slot currently holds a live entity.
    fn is_active(&self) -> bool;
    /// Flip the lifecycle flag. Payload is left untouched.
    fn set_active(&mut self, active: bool);
}

/// Fixed-capacity pool over any [`PoolSlot`] record.
///
/// `acquire` scans for the first inactive slot in index order and never
/// grows the backing storage; callers drop the request on `None`.
pub struct Pool<T: PoolSlot> {
    slots: Vec<T>,
}

impl<T: PoolSlot> Pool<T> {
    /// Create a pool of `capacity` inactive slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(T::inactive).collect(),
        }
    }

    /// Total slot count, fixed for the lifetime of the pool.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Activate and return the first free slot, or `None` when exhausted.
    ///
    /// The caller must overwrite the payload before the slot is observed;
    /// whatever the previous occupant left behind is still in there.
    pub fn acquire(&mut self) -> Option<&mut T> {
        let slot = self.slots.iter_mut().find(|s| !s.is_active())?;
        slot.set_active(true);
        Some(slot)
    }

    /// Deactivate the slot at `index`. Payload stays stale until reuse.
    pub fn release(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.set_active(false);
        }
    }

    /// Number of currently active slots (linear scan).
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    /// Shared view of the full slot array, inactive slots included.
    #[inline]
    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    /// Mutable view of the full slot array, inactive slots included.
    #[inline]
    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Iterate active slots in index order.
    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|s| s.is_active())
    }

    /// Iterate active slots mutably in index order.
    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|s| s.is_active())
    }

    /// Deactivate every slot (run reset).
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.set_active(false);
        }
    }
}
