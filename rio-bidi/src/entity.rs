// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::class::{BidiClass, BidiLevel};
use std::ops::Range;

/// Maximal run of code units sharing a class and an embedding level.
///
/// The run is stored as a half-open range of indices into the text it was
/// built from; [`Entity::text`] borrows it back out of that buffer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Entity {
    pub start: usize,
    pub end: usize,
    pub level: BidiLevel,
    pub class: BidiClass,
}

impl Entity {
    #[inline]
    pub fn new(start: usize, end: usize, level: BidiLevel, class: BidiClass) -> Self {
        Self {
            start,
            end,
            level,
            class,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns true if the run is painted right-to-left.
    #[inline]
    pub fn is_rtl(&self) -> bool {
        self.level & 1 != 0
    }

    /// Code units of the run, taken from the buffer it was built from.
    #[inline]
    pub fn text<'a>(&self, source: &'a [u16]) -> &'a [u16] {
        &source[self.range()]
    }
}

/// A resolved run in visual order, borrowing the caller's text.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct VisualRun<'a> {
    pub text: &'a [u16],
    pub range: Range<usize>,
    pub level: BidiLevel,
    pub class: BidiClass,
}

impl<'a> VisualRun<'a> {
    #[inline]
    pub fn from_entity(entity: &Entity, source: &'a [u16]) -> Self {
        Self {
            text: entity.text(source),
            range: entity.range(),
            level: entity.level,
            class: entity.class,
        }
    }

    #[inline]
    pub fn is_rtl(&self) -> bool {
        self.level & 1 != 0
    }

    /// Decodes the run, replacing unpaired surrogates.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.text)
    }
}
