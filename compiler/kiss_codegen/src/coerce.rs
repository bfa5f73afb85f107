//! Size coercion tables.
//!
//! Each rule is a table indexed by `[left.index()][right.index()]` (or
//! `[from][to]` for conversions), so every size pair has one visible entry.
//!
//! | rule | operands | result |
//! |------|----------|--------|
//! | additive, boolean, compare | both to the wider size | wider size (compare: byte flag) |
//! | multiply | both to the wider size, at least word | `B×B` word, otherwise long |
//! | divide | dividend to long; divisor to word, or long if either is long | dividend's size |
//! | store | value to the variable's size | variable's size |

use kiss_asm::{Conversion, Size};

use Conversion::{
    ExtendByteToLong as EXTB_L, ExtendByteToWord as EXT_W, ExtendWordToLong as EXT_L,
    TruncateToByte as TRUNC_B, TruncateToWord as TRUNC_W,
};
use Size::{Byte as B, Long as L, Word as W};

/// Conversion taking a value of size `from` to size `to`, indexed `[from][to]`.
///
/// Widening is exactly one sign extension and narrowing exactly one
/// truncation.
pub const CONVERSION: [[Option<Conversion>; 3]; 3] = [
    [None, Some(EXT_W), Some(EXTB_L)],    // from B
    [Some(TRUNC_B), None, Some(EXT_L)],   // from W
    [Some(TRUNC_B), Some(TRUNC_W), None], // from L
];

/// Common size for `+ - & | ~` and relations, indexed `[left][right]`.
pub const ADDITIVE: [[Size; 3]; 3] = [
    //  B  W  L
    [B, W, L], // B
    [W, W, L], // W
    [L, L, L], // L
];

/// Which machine primitive carries out a multiply or divide.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Via {
    /// `MULS` / `DIVS`.
    Hardware,
    /// `JSR MUL32` / `JSR DIV32`.
    Library,
}

/// How to multiply two operands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MulPlan {
    /// Size both operands are converted to first.
    pub operands: Size,
    pub via: Via,
    pub result: Size,
}

const fn mul(operands: Size, via: Via, result: Size) -> MulPlan {
    MulPlan {
        operands,
        via,
        result,
    }
}

/// Multiply rule, indexed `[left][right]`.
pub const MULTIPLY: [[MulPlan; 3]; 3] = [
    [
        mul(W, Via::Hardware, W),
        mul(W, Via::Hardware, L),
        mul(L, Via::Library, L),
    ],
    [
        mul(W, Via::Hardware, L),
        mul(W, Via::Hardware, L),
        mul(L, Via::Library, L),
    ],
    [
        mul(L, Via::Library, L),
        mul(L, Via::Library, L),
        mul(L, Via::Library, L),
    ],
];

/// How to divide. The dividend is always widened to long first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DivPlan {
    /// Size the divisor is converted to.
    pub divisor: Size,
    pub via: Via,
    /// Always the dividend's size.
    pub quotient: Size,
}

const fn div(divisor: Size, via: Via, quotient: Size) -> DivPlan {
    DivPlan {
        divisor,
        via,
        quotient,
    }
}

/// Divide rule, indexed `[dividend][divisor]`.
///
/// A long divisor always goes through the library. Under a byte or word
/// dividend the long quotient is then truncated to the dividend's size; its
/// magnitude never exceeds the dividend's, so nothing is lost.
pub const DIVIDE: [[DivPlan; 3]; 3] = [
    [
        div(W, Via::Hardware, B),
        div(W, Via::Hardware, B),
        div(L, Via::Library, B),
    ],
    [
        div(W, Via::Hardware, W),
        div(W, Via::Hardware, W),
        div(L, Via::Library, W),
    ],
    [
        div(L, Via::Library, L),
        div(L, Via::Library, L),
        div(L, Via::Library, L),
    ],
];

#[inline]
pub fn conversion(from: Size, to: Size) -> Option<Conversion> {
    CONVERSION[from.index()][to.index()]
}

#[inline]
pub fn additive(left: Size, right: Size) -> Size {
    ADDITIVE[left.index()][right.index()]
}

#[inline]
pub fn multiply(left: Size, right: Size) -> MulPlan {
    MULTIPLY[left.index()][right.index()]
}

#[inline]
pub fn divide(dividend: Size, divisor: Size) -> DivPlan {
    DIVIDE[dividend.index()][divisor.index()]
}
