//! Operand sizes.
//!
//! Every value the machine handles is a signed two's-complement integer of
//! one of three widths. Sizes are ordered by width so `max` picks the wider.

use std::fmt;

/// Width of a value, variable or operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Size {
    /// 8 bits.
    Byte,
    /// 16 bits.
    Word,
    /// 32 bits.
    Long,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Byte, Size::Word, Size::Long];

    /// Position in [`Size::ALL`]; used to index the coercion tables.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Size::Byte => 0,
            Size::Word => 1,
            Size::Long => 2,
        }
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Size::Byte => 8,
            Size::Word => 16,
            Size::Long => 32,
        }
    }

    /// Opcode suffix letter (`MOVE.W`).
    #[inline]
    pub const fn suffix(self) -> char {
        match self {
            Size::Byte => 'B',
            Size::Word => 'W',
            Size::Long => 'L',
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Size> {
        match suffix {
            "B" => Some(Size::Byte),
            "W" => Some(Size::Word),
            "L" => Some(Size::Long),
            _ => None,
        }
    }

    /// The wider of two sizes.
    #[inline]
    #[must_use]
    pub fn wider(self, other: Size) -> Size {
        self.max(other)
    }

    /// Narrowest size that holds `value` without loss.
    ///
    /// Values outside the long range are loaded as longs and wrap.
    pub fn of_constant(value: i64) -> Size {
        if (-128..=127).contains(&value) {
            Size::Byte
        } else if (-32_768..=32_767).contains(&value) {
            Size::Word
        } else {
            Size::Long
        }
    }

    /// Reduce `value` to this width and sign-extend it back.
    ///
    /// This is how the machine stores a result of this size: the bits above
    /// the width are dropped and the remaining top bit is the sign.
    #[inline]
    pub fn wrap(self, value: i64) -> i64 {
        let shift = 64 - self.bits();
        value.wrapping_shl(shift).wrapping_shr(shift)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}
