//! Packed tile identifiers.
//!
//! Map files store one `u32` per cell: the low 29 bits are the global tile
//! id, the top three bits carry the flip state. GID 0 means the cell is
//! empty.

use std::ops::BitOr;

pub const FLIP_H: u32 = 0x8000_0000; // bit 31
pub const FLIP_V: u32 = 0x4000_0000; // bit 30
pub const FLIP_D: u32 = 0x2000_0000; // bit 29
pub const FLAG_MASK: u32 = FLIP_H | FLIP_V | FLIP_D;
pub const GID_MASK: u32 = 0x1FFF_FFFF; // keep lower 29 bits (bit 28 is free)

/// A raw grid cell value: global tile id plus flip flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileGid(pub u32);

impl TileGid {
    /// Packs a clean gid and a set of flip flags back into one cell value.
    #[inline]
    pub fn compose(gid: u32, flags: TileFlags) -> Self {
        TileGid((gid & GID_MASK) | flags.bits())
    }

    #[inline] pub fn raw(self) -> u32 { self.0 }
    #[inline] pub fn clean(self) -> u32 { self.0 & GID_MASK }
    #[inline] pub fn flags(self) -> TileFlags { TileFlags(self.0 & FLAG_MASK) }
    #[inline] pub fn flip_h(self) -> bool { (self.0 & FLIP_H) != 0 }
    #[inline] pub fn flip_v(self) -> bool { (self.0 & FLIP_V) != 0 }
    #[inline] pub fn flip_d(self) -> bool { (self.0 & FLIP_D) != 0 }
    #[inline] pub fn is_empty(self) -> bool { self.clean() == 0 }
}

/// Just the flip bits of a cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileFlags(u32);

impl TileFlags {
    pub const NONE: TileFlags = TileFlags(0);
    pub const HORIZONTAL: TileFlags = TileFlags(FLIP_H);
    pub const VERTICAL: TileFlags = TileFlags(FLIP_V);
    pub const DIAGONAL: TileFlags = TileFlags(FLIP_D);

    /// Keeps only the flag bits of `raw`.
    #[inline]
    pub fn from_raw(raw: u32) -> Self {
        TileFlags(raw & FLAG_MASK)
    }

    #[inline] pub fn bits(self) -> u32 { self.0 }
    #[inline] pub fn is_none(self) -> bool { self.0 == 0 }
    #[inline] pub fn contains(self, other: TileFlags) -> bool { self.0 & other.0 == other.0 }
}

impl BitOr for TileFlags {
    type Output = TileFlags;

    fn bitor(self, rhs: TileFlags) -> TileFlags {
        TileFlags(self.0 | rhs.0)
    }
}
