//! Ordered index of the quads in the shared batch.
//!
//! Slot i always describes quad i of the batch, so inserting or removing a
//! slot shifts everything behind it, exactly like the quad buffer itself.
//! The sequence stays sorted by draw-order key; among equal keys, earlier
//! insertions come first.

/// One entry of the index: the key a quad was filed under and the grid
/// cell that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasSlot {
    pub key: i32,
    /// Row-major cell index, `y * width + x`.
    pub cell: u32,
}

/// Sorted, dense mapping from draw-order key to quad position.
///
/// Searches are logarithmic in the slot count; inserts and removals shift
/// the tail, which stays cheap because the slot count is bounded by the
/// visible tile count, not the grid size.
#[derive(Debug, Default)]
pub struct AtlasIndex {
    slots: Vec<AtlasSlot>,
}

impl AtlasIndex {
    pub fn new() -> Self {
        AtlasIndex { slots: Vec::new() }
    }

    #[inline] pub fn len(&self) -> usize { self.slots.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    pub fn slots(&self) -> &[AtlasSlot] {
        &self.slots
    }

    /// Insertion point for a key not yet backed by a quad: past every slot
    /// with a key less than or equal to `key`, so newer entries land after
    /// existing equals and equal-key runs keep their creation order.
    pub fn index_for_new(&self, key: i32) -> usize {
        self.slots.partition_point(|s| s.key <= key)
    }

    /// Position of the slot already filed for `cell` under `key`: binary
    /// search to the start of the equal-key run, then a linear scan within
    /// the run for the owning cell.
    pub fn index_for_existing(&self, key: i32, cell: u32) -> Option<usize> {
        let start = self.slots.partition_point(|s| s.key < key);
        self.slots[start..]
            .iter()
            .take_while(|s| s.key == key)
            .position(|s| s.cell == cell)
            .map(|offset| start + offset)
    }

    pub fn insert(&mut self, index: usize, slot: AtlasSlot) {
        self.slots.insert(index, slot);
    }

    pub fn remove_at(&mut self, index: usize) -> AtlasSlot {
        self.slots.remove(index)
    }

    /// Relocates one slot, shifting everything between `from` and `to`.
    /// The caller picks `to` so the sequence stays sorted.
    pub fn move_to(&mut self, from: usize, to: usize) {
        let slot = self.slots.remove(from);
        self.slots.insert(to, slot);
    }
}
