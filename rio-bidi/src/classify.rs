// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::class::BidiClass;
use crate::table::{DENSE, DENSE_LIMIT, RANGES};

/// Returns the bidirectional class of a UTF-16 code unit.
///
/// Latin-1 controls and punctuation come straight from a dense table, the
/// rest of the plane is a binary search over sorted range bounds. Code units
/// past the last bound (U+FFFE, U+FFFF) are `ON`.
#[inline]
pub fn classify(ch: u16) -> BidiClass {
    if ch < DENSE_LIMIT {
        return DENSE[ch as usize];
    }
    let index = RANGES.partition_point(|&(upper, _)| upper < ch);
    match RANGES.get(index) {
        Some(&(_, class)) => class,
        None => BidiClass::ON,
    }
}

/// Bidirectional class lookup for code points.
pub trait Classify: Copy {
    fn bidi_class(self) -> BidiClass;
}

impl Classify for u16 {
    #[inline]
    fn bidi_class(self) -> BidiClass {
        classify(self)
    }
}

impl Classify for char {
    /// Supplementary plane characters are not in the table and read as `L`,
    /// the class their surrogate code units get from [`classify`].
    #[inline]
    fn bidi_class(self) -> BidiClass {
        match u16::try_from(u32::from(self)) {
            Ok(unit) => classify(unit),
            Err(_) => BidiClass::L,
        }
    }
}
