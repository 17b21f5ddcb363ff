// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Bidirectional character classes.

// Class names follow the Unicode property value aliases.
#![allow(clippy::upper_case_acronyms)]

use std::fmt;

/// Type alias for a bidirectional level.
pub type BidiLevel = u8;

/// Bidirectional character class of a code unit.
///
/// The high nibble of the discriminant is the [`BidiCategory`] of the class,
/// so the category never needs a table of its own.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum BidiClass {
    /// Left-to-right.
    L = 0x10,
    /// Right-to-left.
    R = 0x11,
    /// Arabic letter.
    AL = 0x12,
    /// European number.
    EN = 0x20,
    /// European separator.
    ES = 0x21,
    /// European terminator.
    ET = 0x22,
    /// Arabic number.
    AN = 0x23,
    /// Common separator.
    CS = 0x24,
    /// Nonspacing mark.
    NSM = 0x25,
    /// Boundary neutral.
    BN = 0x26,
    /// Paragraph separator.
    B = 0x40,
    /// Segment separator.
    S = 0x41,
    /// Whitespace.
    WS = 0x42,
    /// Other neutral.
    ON = 0x43,
    /// Left-to-right embedding.
    LRE = 0x80,
    /// Left-to-right override.
    LRO = 0x81,
    /// Right-to-left embedding.
    RLE = 0x82,
    /// Right-to-left override.
    RLO = 0x83,
    /// Pop directional format.
    PDF = 0x84,
}

/// Top level grouping of the bidirectional classes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum BidiCategory {
    Strong = 0x10,
    Weak = 0x20,
    Neutral = 0x40,
    Explicit = 0x80,
}

const CATEGORY_MASK: u8 = 0xF0;

use BidiClass::*;

impl BidiClass {
    /// Every class, in discriminant order.
    pub const ALL: [BidiClass; 19] = [
        L, R, AL, EN, ES, ET, AN, CS, NSM, BN, B, S, WS, ON, LRE, LRO, RLE, RLO, PDF,
    ];

    /// Returns the category encoded in the high bits of the class.
    #[inline]
    pub const fn category(self) -> BidiCategory {
        match self as u8 & CATEGORY_MASK {
            0x10 => BidiCategory::Strong,
            0x20 => BidiCategory::Weak,
            0x40 => BidiCategory::Neutral,
            _ => BidiCategory::Explicit,
        }
    }

    /// Returns a single bit identifying the class, for building class sets.
    #[inline]
    pub const fn mask(self) -> u32 {
        let value = self as u8;
        let row = match value & CATEGORY_MASK {
            0x10 => 0,
            0x20 => 3,
            0x40 => 10,
            _ => 14,
        };
        1 << (row + (value & 0x0F))
    }

    #[inline]
    pub const fn is_strong(self) -> bool {
        self as u8 & CATEGORY_MASK == BidiCategory::Strong as u8
    }

    #[inline]
    pub const fn is_weak(self) -> bool {
        self as u8 & CATEGORY_MASK == BidiCategory::Weak as u8
    }

    #[inline]
    pub const fn is_neutral(self) -> bool {
        self as u8 & CATEGORY_MASK == BidiCategory::Neutral as u8
    }

    /// Returns true for the embedding and override controls and PDF.
    #[inline]
    pub const fn is_explicit(self) -> bool {
        self as u8 & CATEGORY_MASK == BidiCategory::Explicit as u8
    }

    /// Short property alias of the class, e.g. `"NSM"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            L => "L",
            R => "R",
            AL => "AL",
            EN => "EN",
            ES => "ES",
            ET => "ET",
            AN => "AN",
            CS => "CS",
            NSM => "NSM",
            BN => "BN",
            B => "B",
            S => "S",
            WS => "WS",
            ON => "ON",
            LRE => "LRE",
            LRO => "LRO",
            RLE => "RLE",
            RLO => "RLO",
            PDF => "PDF",
        }
    }
}

impl fmt::Display for BidiClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns a default bidi type for a level.
#[inline]
pub fn type_from_level(level: BidiLevel) -> BidiClass {
    if level & 1 == 0 {
        L
    } else {
        R
    }
}

pub(crate) const RTL_EMBEDDING_MASK: u32 = RLE.mask() | RLO.mask();
pub(crate) const STRONG_MASK: u32 = L.mask() | R.mask() | AL.mask();
pub(crate) const SEPARATOR_MASK: u32 = ES.mask() | CS.mask();
pub(crate) const LEFTOVER_MASK: u32 = ES.mask() | ET.mask() | CS.mask();
pub(crate) const NUMBER_MASK: u32 = EN.mask() | AN.mask();
// BN is weak and left untouched by the neutral rules.
pub(crate) const NEUTRAL_MASK: u32 = B.mask() | S.mask() | WS.mask() | ON.mask();
