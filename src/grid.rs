//! Flat row-major storage for the layer's cell values.

use crate::gid::{TileFlags, GID_MASK};

/// The packed gid buffer of one layer, `width * height` cells.
///
/// The buffer is allocated once and never resized; only its contents
/// mutate. `release` drops it permanently, after which every query reads
/// as empty. Out-of-range queries also read as empty, so gameplay code can
/// probe speculatively.
#[derive(Debug)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Option<Vec<u32>>,
}

impl TileGrid {
    pub fn new(width: u32, height: u32, tiles: Vec<u32>) -> Self {
        debug_assert_eq!(tiles.len(), (width as usize) * (height as usize));
        TileGrid {
            width,
            height,
            tiles: Some(tiles),
        }
    }

    #[inline] pub fn width(&self) -> u32 { self.width }
    #[inline] pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Raw cell value (gid plus flag bits), 0 when out of range or released.
    pub fn raw_at(&self, x: u32, y: u32) -> u32 {
        if !self.in_bounds(x, y) {
            return 0;
        }
        match &self.tiles {
            Some(tiles) => tiles[(y * self.width + x) as usize],
            None => 0,
        }
    }

    /// Clean gid with the flag bits stripped.
    pub fn gid_at(&self, x: u32, y: u32) -> u32 {
        self.raw_at(x, y) & GID_MASK
    }

    pub fn gid_and_flags_at(&self, x: u32, y: u32) -> (u32, TileFlags) {
        let raw = self.raw_at(x, y);
        (raw & GID_MASK, TileFlags::from_raw(raw))
    }

    /// Writes a packed cell value. Out-of-range or released writes are
    /// dropped.
    pub fn set_raw(&mut self, x: u32, y: u32, raw: u32) {
        if !self.in_bounds(x, y) {
            return;
        }
        if let Some(tiles) = &mut self.tiles {
            tiles[(y * self.width + x) as usize] = raw;
        }
    }

    /// Frees the buffer. Coordinate queries stop working for good; callers
    /// that still need `gid_at` must not release.
    pub fn release(&mut self) {
        self.tiles = None;
    }

    #[inline]
    pub fn is_released(&self) -> bool {
        self.tiles.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gid::{TileFlags, FLIP_H};

    #[test]
    fn out_of_range_reads_as_empty() {
        let grid = TileGrid::new(2, 2, vec![1, 2, 3, 4]);
        assert_eq!(grid.gid_at(2, 0), 0);
        assert_eq!(grid.gid_at(0, 2), 0);
        assert_eq!(grid.gid_at(1, 1), 4);
    }

    #[test]
    fn flags_split_from_gid() {
        let grid = TileGrid::new(1, 1, vec![FLIP_H | 9]);
        assert_eq!(grid.gid_at(0, 0), 9);
        assert_eq!(grid.gid_and_flags_at(0, 0), (9, TileFlags::HORIZONTAL));
    }

    #[test]
    fn release_makes_every_query_empty_without_panicking() {
        let mut grid = TileGrid::new(2, 1, vec![5, 6]);
        grid.release();
        assert!(grid.is_released());
        assert_eq!(grid.raw_at(0, 0), 0);
        assert_eq!(grid.gid_at(1, 0), 0);
        grid.set_raw(0, 0, 7);
        assert_eq!(grid.gid_at(0, 0), 0);
    }
}
