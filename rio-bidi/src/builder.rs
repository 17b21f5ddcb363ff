// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Segmentation of logical text into entities, applying the explicit
//! embedding and override controls along the way.

use crate::class::BidiClass::{self, *};
use crate::class::{BidiLevel, RTL_EMBEDDING_MASK};
use crate::classify::classify;
use crate::config::defaults::MAX_DEPTH;
use crate::entity::Entity;
use smallvec::SmallVec;

/// Class forced on the characters of an override.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum DirectionalOverride {
    #[default]
    Neutral,
    LeftToRight,
    RightToLeft,
}

impl DirectionalOverride {
    #[inline]
    pub fn apply(self, class: BidiClass) -> BidiClass {
        match self {
            DirectionalOverride::Neutral => class,
            DirectionalOverride::LeftToRight => L,
            DirectionalOverride::RightToLeft => R,
        }
    }
}

/// Embedding state saved when an embedding or override starts.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Remember {
    pub level: BidiLevel,
    pub directional_override: DirectionalOverride,
}

/// Returns the paragraph level: 1 if the first strong character is
/// right-to-left, 0 otherwise.
pub fn paragraph_level(text: &[u16]) -> BidiLevel {
    text.iter()
        .find_map(|&unit| match classify(unit) {
            L => Some(0),
            R | AL => Some(1),
            _ => None,
        })
        .unwrap_or(0)
}

/// Splits `text` into entities, using the paragraph level of the text and
/// the deepest supported embedding.
pub fn build_runs(text: &[u16]) -> Vec<Entity> {
    let mut entities = Vec::new();
    RunBuilder::new(paragraph_level(text), MAX_DEPTH).build(text, &mut entities);
    entities
}

/// Single pass run builder with an explicit embedding stack.
pub struct RunBuilder {
    stack: SmallVec<[Remember; 8]>,
    current: Remember,
    max_depth: BidiLevel,
    overflow: usize,
    pending: Option<Entity>,
}

impl RunBuilder {
    pub fn new(paragraph_level: BidiLevel, max_depth: BidiLevel) -> Self {
        Self {
            stack: SmallVec::new(),
            current: Remember {
                level: paragraph_level,
                directional_override: DirectionalOverride::Neutral,
            },
            max_depth: max_depth.min(MAX_DEPTH),
            overflow: 0,
            pending: None,
        }
    }

    /// Clears the embedding state for a new paragraph.
    pub fn reset(&mut self, paragraph_level: BidiLevel) {
        self.stack.clear();
        self.current = Remember {
            level: paragraph_level,
            directional_override: DirectionalOverride::Neutral,
        };
        self.overflow = 0;
        self.pending = None;
    }

    /// Current embedding state.
    #[inline]
    pub fn state(&self) -> Remember {
        self.current
    }

    /// Appends the entities of `text` to `entities`.
    pub fn build(&mut self, text: &[u16], entities: &mut Vec<Entity>) {
        for (index, &unit) in text.iter().enumerate() {
            let class = classify(unit);
            match class {
                PDF => {
                    self.flush(entities);
                    self.pop();
                }
                LRE | RLE | LRO | RLO => {
                    self.flush(entities);
                    self.push(class);
                }
                _ => self.extend(index, class, entities),
            }
        }
        self.flush(entities);
    }

    fn push(&mut self, class: BidiClass) {
        let level = self.current.level;
        let next = if class.mask() & RTL_EMBEDDING_MASK != 0 {
            (level + 1) | 1
        } else {
            (level + 2) & !1
        };
        if next > self.max_depth || self.overflow > 0 {
            self.overflow += 1;
            tracing::trace!("embedding {class} past level {level} ignored");
            return;
        }
        self.stack.push(self.current);
        self.current = Remember {
            level: next,
            directional_override: match class {
                LRO => DirectionalOverride::LeftToRight,
                RLO => DirectionalOverride::RightToLeft,
                _ => DirectionalOverride::Neutral,
            },
        };
    }

    fn pop(&mut self) {
        if self.overflow > 0 {
            self.overflow -= 1;
            return;
        }
        // PDF without a matching initiator is ignored.
        if let Some(previous) = self.stack.pop() {
            self.current = previous;
        }
    }

    fn extend(&mut self, index: usize, class: BidiClass, entities: &mut Vec<Entity>) {
        let class = self.current.directional_override.apply(class);
        if let Some(entity) = self.pending.as_mut() {
            if entity.class == class {
                entity.end = index + 1;
                return;
            }
        }
        self.flush(entities);
        self.pending = Some(Entity::new(index, index + 1, self.current.level, class));
    }

    #[inline]
    fn flush(&mut self, entities: &mut Vec<Entity>) {
        if let Some(entity) = self.pending.take() {
            entities.push(entity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LRE_UNIT: u16 = 0x202A;
    const RLE_UNIT: u16 = 0x202B;
    const PDF_UNIT: u16 = 0x202C;
    const LRO_UNIT: u16 = 0x202D;
    const RLO_UNIT: u16 = 0x202E;

    fn units(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    #[test]
    fn test_paragraph_level() {
        assert_eq!(paragraph_level(&units("abc")), 0);
        assert_eq!(paragraph_level(&units("\u{05D0}bc")), 1);
        assert_eq!(paragraph_level(&units("123 \u{0627}")), 1);
        assert_eq!(paragraph_level(&units("12 abc \u{05D0}")), 0);
        assert_eq!(paragraph_level(&units("123 !?")), 0);
        assert_eq!(paragraph_level(&[]), 0);
    }

    #[test]
    fn test_groups_same_class() {
        let text = units("ab 12");
        assert_eq!(
            build_runs(&text),
            vec![
                Entity::new(0, 2, 0, L),
                Entity::new(2, 3, 0, WS),
                Entity::new(3, 5, 0, EN),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(build_runs(&[]).is_empty());
    }

    #[test]
    fn test_override_merges_classes() {
        // "a1." under LRO are all forced to L and form one entity.
        let text = [LRO_UNIT, b'a' as u16, b'1' as u16, b'.' as u16, PDF_UNIT];
        assert_eq!(build_runs(&text), vec![Entity::new(1, 4, 2, L)]);

        let text = [RLO_UNIT, b'a' as u16, b'b' as u16, PDF_UNIT, b'c' as u16];
        assert_eq!(
            build_runs(&text),
            vec![Entity::new(1, 3, 1, R), Entity::new(4, 5, 0, L)]
        );
    }

    #[test]
    fn test_nested_levels() {
        let text = [
            b'a' as u16,
            RLE_UNIT,
            b'b' as u16,
            LRE_UNIT,
            b'c' as u16,
            PDF_UNIT,
            b'd' as u16,
            PDF_UNIT,
            b'e' as u16,
        ];
        let levels: Vec<_> = build_runs(&text).iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![0, 1, 2, 1, 0]);
    }

    #[test]
    fn test_controls_never_inside_entities() {
        let text = [b'a' as u16, PDF_UNIT, b'b' as u16, LRE_UNIT, PDF_UNIT, b'c' as u16];
        let entities = build_runs(&text);
        for entity in &entities {
            for &unit in entity.text(&text) {
                assert!(!classify(unit).is_explicit());
            }
        }
        let covered: usize = entities.iter().map(Entity::len).sum();
        assert_eq!(covered, 3);
    }

    #[test]
    fn test_unmatched_pdf_is_ignored() {
        let text = [b'a' as u16, PDF_UNIT, PDF_UNIT, b'b' as u16];
        let entities = build_runs(&text);
        assert_eq!(
            entities,
            vec![Entity::new(0, 1, 0, L), Entity::new(3, 4, 0, L)]
        );
    }

    #[test]
    fn test_overflow_is_ignored_with_its_pdf() {
        let mut entities = Vec::new();
        let mut builder = RunBuilder::new(0, 2);
        let text = [
            LRE_UNIT,
            LRE_UNIT,
            b'a' as u16,
            PDF_UNIT,
            b'b' as u16,
            PDF_UNIT,
            b'c' as u16,
        ];
        builder.build(&text, &mut entities);
        assert_eq!(
            entities,
            vec![
                Entity::new(2, 3, 2, L),
                Entity::new(4, 5, 2, L),
                Entity::new(6, 7, 0, L),
            ]
        );
        assert_eq!(builder.state(), Remember::default());
    }

    #[test]
    fn test_reset() {
        let mut entities = Vec::new();
        let mut builder = RunBuilder::new(0, MAX_DEPTH);
        builder.build(&[RLE_UNIT, b'a' as u16], &mut entities);
        assert_eq!(builder.state().level, 1);
        builder.reset(0);
        assert_eq!(builder.state(), Remember::default());
    }
}
