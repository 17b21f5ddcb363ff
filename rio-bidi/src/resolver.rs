// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Weak, neutral and implicit resolution over entities.
//!
//! Each phase walks the entities one level run at a time: a level run is a
//! maximal sequence of adjacent entities with the same embedding level,
//! bounded by `sor` and `eor`, the strong direction of the higher of the
//! two levels meeting at each edge.

use crate::class::BidiClass::{self, *};
use crate::class::{
    type_from_level, BidiLevel, LEFTOVER_MASK, NEUTRAL_MASK, NUMBER_MASK,
    SEPARATOR_MASK, STRONG_MASK,
};
use crate::entity::Entity;

/// A maximal sequence of entities sharing a level.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct LevelRun {
    pub start: usize,
    pub end: usize,
    pub level: BidiLevel,
    pub sor: BidiClass,
    pub eor: BidiClass,
}

/// Splits `entities` into level runs.
///
/// Edges of the paragraph count as the paragraph level.
pub fn level_runs(entities: &[Entity], paragraph_level: BidiLevel) -> Vec<LevelRun> {
    let mut runs: Vec<LevelRun> = Vec::new();
    let mut start = 0;
    while start < entities.len() {
        let level = entities[start].level;
        let end = start
            + entities[start..]
                .iter()
                .take_while(|entity| entity.level == level)
                .count();
        let prev_level = runs.last().map_or(paragraph_level, |run| run.level);
        let next_level = entities.get(end).map_or(paragraph_level, |e| e.level);
        runs.push(LevelRun {
            start,
            end,
            level,
            sor: type_from_level(prev_level.max(level)),
            eor: type_from_level(next_level.max(level)),
        });
        start = end;
    }
    runs
}

/// Runs the weak, neutral and implicit phases in order.
pub fn resolve(entities: &mut [Entity], paragraph_level: BidiLevel) {
    let runs = level_runs(entities, paragraph_level);
    for run in &runs {
        resolve_weak_run(&mut entities[run.start..run.end], run.sor, run.eor);
    }
    for run in &runs {
        resolve_neutral_run(&mut entities[run.start..run.end], run);
    }
    resolve_implicit(entities);
}

/// Applies rules W1 to W7 to every level run.
pub fn resolve_weak(entities: &mut [Entity], paragraph_level: BidiLevel) {
    for run in level_runs(entities, paragraph_level) {
        resolve_weak_run(&mut entities[run.start..run.end], run.sor, run.eor);
    }
}

/// Applies rules N1 and N2 to every level run.
///
/// Expects weak types to be resolved already.
pub fn resolve_neutral(entities: &mut [Entity], paragraph_level: BidiLevel) {
    for run in level_runs(entities, paragraph_level) {
        resolve_neutral_run(&mut entities[run.start..run.end], &run);
    }
}

/// Applies rules I1 and I2, raising levels according to the final classes.
pub fn resolve_implicit(entities: &mut [Entity]) {
    for entity in entities {
        let level = entity.level;
        if level & 1 == 0 {
            // I1
            match entity.class {
                R => entity.level = level + 1,
                EN | AN => entity.level = level + 2,
                _ => {}
            }
        } else {
            // I2
            match entity.class {
                L | EN | AN => entity.level = level + 1,
                _ => {}
            }
        }
    }
}

fn resolve_weak_run(run: &mut [Entity], sor: BidiClass, eor: BidiClass) {
    let len = run.len();
    let mut prev = sor;
    let mut prev_strong = sor;
    for i in 0..len {
        let mut t = run[i].class;
        if t == NSM {
            // W1
            run[i].class = prev;
            continue;
        }
        let tmask = t.mask();
        if t == EN {
            // W2
            if prev_strong == AL {
                t = AN;
                run[i].class = t;
            }
        } else if tmask & STRONG_MASK != 0 {
            prev_strong = t;
            // W3
            if t == AL {
                t = R;
                run[i].class = t;
            }
        } else if tmask & SEPARATOR_MASK != 0 && i + 1 < len && run[i].len() == 1 {
            // W4
            let mut next = run[i + 1].class;
            if next == EN && prev_strong == AL {
                next = AN;
            }
            if prev == EN && next == EN {
                t = EN;
                run[i].class = t;
            } else if t == CS && prev == AN && next == AN {
                t = AN;
                run[i].class = t;
            }
        }
        prev = t;
    }
    // W5
    let mut i = 0;
    while i < len {
        if run[i].class == ET {
            let limit = find_limit(run, i, |class| class == ET);
            let mut t = if i == 0 { sor } else { run[i - 1].class };
            if t != EN {
                t = if limit == len { eor } else { run[limit].class };
            }
            if t == EN {
                for entity in &mut run[i..limit] {
                    entity.class = EN;
                }
            }
            i = limit;
        } else {
            i += 1;
        }
    }
    // W6, W7
    prev_strong = sor;
    for entity in run.iter_mut() {
        let t = entity.class;
        if t.mask() & LEFTOVER_MASK != 0 {
            // W6
            entity.class = ON;
        } else if t == EN {
            // W7
            if prev_strong == L {
                entity.class = L;
            }
        } else if t == L || t == R {
            prev_strong = t;
        }
    }
}

fn resolve_neutral_run(run: &mut [Entity], bounds: &LevelRun) {
    let len = run.len();
    let mut i = 0;
    while i < len {
        if run[i].class.mask() & NEUTRAL_MASK == 0 {
            i += 1;
            continue;
        }
        let limit = find_limit(run, i, |class| class.mask() & NEUTRAL_MASK != 0);
        let leading = if i == 0 {
            bounds.sor
        } else {
            direction_of(run[i - 1].class)
        };
        let trailing = if limit == len {
            bounds.eor
        } else {
            direction_of(run[limit].class)
        };
        let resolved = if leading == trailing {
            // N1
            leading
        } else {
            // N2
            type_from_level(bounds.level)
        };
        for entity in &mut run[i..limit] {
            entity.class = resolved;
        }
        i = limit;
    }
}

/// Numbers count as right-to-left next to neutrals.
#[inline]
fn direction_of(class: BidiClass) -> BidiClass {
    if class.mask() & NUMBER_MASK != 0 {
        R
    } else {
        class
    }
}

fn find_limit(run: &[Entity], offset: usize, matches: impl Fn(BidiClass) -> bool) -> usize {
    offset
        + run[offset..]
            .iter()
            .take_while(|entity| matches(entity.class))
            .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_runs;
    use pretty_assertions::assert_eq;

    fn entities(items: &[(BidiClass, BidiLevel)]) -> Vec<Entity> {
        items.iter()
            .enumerate()
            .map(|(i, &(class, level))| Entity::new(i, i + 1, level, class))
            .collect()
    }

    fn classes(entities: &[Entity]) -> Vec<BidiClass> {
        entities.iter().map(|entity| entity.class).collect()
    }

    fn levels(entities: &[Entity]) -> Vec<BidiLevel> {
        entities.iter().map(|entity| entity.level).collect()
    }

    #[test]
    fn test_level_runs_sor_eor() {
        let list = entities(&[(L, 0), (L, 0), (R, 1), (L, 2), (L, 0)]);
        let runs = level_runs(&list, 0);
        assert_eq!(
            runs,
            vec![
                LevelRun { start: 0, end: 2, level: 0, sor: L, eor: R },
                LevelRun { start: 2, end: 3, level: 1, sor: R, eor: L },
                LevelRun { start: 3, end: 4, level: 2, sor: L, eor: L },
                LevelRun { start: 4, end: 5, level: 0, sor: L, eor: L },
            ]
        );
        assert_eq!(level_runs(&entities(&[(R, 1)]), 1)[0].sor, R);
        assert!(level_runs(&[], 0).is_empty());
    }

    #[test]
    fn test_w1_nsm_takes_previous_class() {
        let mut list = entities(&[(R, 1), (NSM, 1)]);
        resolve_weak(&mut list, 1);
        assert_eq!(classes(&list), vec![R, R]);

        let mut list = entities(&[(NSM, 0), (L, 0)]);
        resolve_weak(&mut list, 0);
        assert_eq!(classes(&list), vec![L, L]);
    }

    #[test]
    fn test_w2_w3_arabic_context() {
        let mut list = entities(&[(AL, 1), (EN, 1)]);
        resolve_weak(&mut list, 1);
        assert_eq!(classes(&list), vec![R, AN]);
    }

    #[test]
    fn test_w4_single_separator_between_numbers() {
        let mut list = entities(&[(EN, 0), (ES, 0), (EN, 0)]);
        resolve_weak(&mut list, 1);
        // sor is R at level 0 inside an rtl paragraph, so W7 keeps EN.
        assert_eq!(classes(&list), vec![EN, EN, EN]);

        let mut list = entities(&[(AN, 1), (CS, 1), (AN, 1)]);
        resolve_weak(&mut list, 1);
        assert_eq!(classes(&list), vec![AN, AN, AN]);

        let mut list = entities(&[(AN, 1), (ES, 1), (AN, 1)]);
        resolve_weak(&mut list, 1);
        assert_eq!(classes(&list), vec![AN, ON, AN]);
    }

    #[test]
    fn test_w4_ignores_separator_sequences() {
        let mut list = vec![
            Entity::new(0, 1, 1, EN),
            Entity::new(1, 3, 1, CS),
            Entity::new(3, 4, 1, EN),
        ];
        resolve_weak(&mut list, 1);
        assert_eq!(classes(&list), vec![EN, ON, EN]);
    }

    #[test]
    fn test_w5_terminators_next_to_numbers() {
        let mut list = entities(&[(ET, 1), (EN, 1)]);
        resolve_weak(&mut list, 1);
        assert_eq!(classes(&list), vec![EN, EN]);

        let mut list = entities(&[(EN, 1), (ET, 1), (ET, 1)]);
        resolve_weak(&mut list, 1);
        assert_eq!(classes(&list), vec![EN, EN, EN]);

        // Arabic numbers do not pull terminators.
        let mut list = entities(&[(AL, 1), (ET, 1), (EN, 1)]);
        resolve_weak(&mut list, 1);
        assert_eq!(classes(&list), vec![R, ON, AN]);
    }

    #[test]
    fn test_w6_leftovers_become_neutral() {
        let mut list = entities(&[(L, 0), (CS, 0), (ET, 0), (ES, 0)]);
        resolve_weak(&mut list, 0);
        assert_eq!(classes(&list), vec![L, ON, ON, ON]);
    }

    #[test]
    fn test_w7_numbers_after_left_to_right() {
        let mut list = entities(&[(L, 0), (WS, 0), (EN, 0)]);
        resolve_weak(&mut list, 0);
        assert_eq!(classes(&list), vec![L, WS, L]);

        let mut list = entities(&[(R, 1), (WS, 1), (EN, 1)]);
        resolve_weak(&mut list, 1);
        assert_eq!(classes(&list), vec![R, WS, EN]);
    }

    #[test]
    fn test_level_boundaries_reset_context() {
        // The AL at level 1 does not turn the EN of the level 0 run into AN.
        let mut list = entities(&[(AL, 1), (EN, 0)]);
        resolve_weak(&mut list, 0);
        assert_eq!(classes(&list), vec![R, EN]);
    }

    #[test]
    fn test_n1_neutrals_between_same_direction() {
        let mut list = entities(&[(R, 0), (WS, 0), (R, 0)]);
        resolve_neutral(&mut list, 0);
        assert_eq!(classes(&list), vec![R, R, R]);

        // Numbers count as R.
        let mut list = entities(&[(R, 0), (ON, 0), (EN, 0)]);
        resolve_neutral(&mut list, 0);
        assert_eq!(classes(&list), vec![R, R, EN]);
    }

    #[test]
    fn test_n2_neutrals_take_embedding_direction() {
        let mut list = entities(&[(L, 0), (WS, 0), (R, 0)]);
        resolve_neutral(&mut list, 0);
        assert_eq!(classes(&list), vec![L, L, R]);

        let mut list = entities(&[(L, 1), (WS, 1), (R, 1)]);
        resolve_neutral(&mut list, 1);
        assert_eq!(classes(&list), vec![L, R, R]);
    }

    #[test]
    fn test_neutrals_at_run_edges_use_sor_eor() {
        let mut list = entities(&[(WS, 1), (R, 1), (ON, 1)]);
        resolve_neutral(&mut list, 1);
        assert_eq!(classes(&list), vec![R, R, R]);

        let mut list = entities(&[(L, 0), (WS, 0), (R, 1)]);
        resolve_neutral(&mut list, 0);
        // eor of the level 0 run is R (level 1 follows).
        assert_eq!(classes(&list), vec![L, L, R]);
    }

    #[test]
    fn test_implicit_levels() {
        let mut list = entities(&[(L, 0), (R, 0), (EN, 0), (AN, 0)]);
        resolve_implicit(&mut list);
        assert_eq!(levels(&list), vec![0, 1, 2, 2]);

        let mut list = entities(&[(L, 1), (R, 1), (EN, 1), (AN, 1)]);
        resolve_implicit(&mut list);
        assert_eq!(levels(&list), vec![2, 1, 2, 2]);

        let mut list = entities(&[(R, 2), (L, 3)]);
        resolve_implicit(&mut list);
        assert_eq!(levels(&list), vec![3, 4]);

        let mut list = entities(&[(BN, 0), (BN, 1)]);
        resolve_implicit(&mut list);
        assert_eq!(levels(&list), vec![0, 1]);
    }

    fn resolved(text: &str) -> Vec<(BidiLevel, BidiClass)> {
        let text: Vec<u16> = text.encode_utf16().collect();
        let mut list = build_runs(&text);
        resolve(&mut list, 0);
        list.iter().map(|e| (e.level, e.class)).collect()
    }

    #[test]
    fn test_boundary_neutral_is_not_a_neutral() {
        // Each `!` sees R on one side and BN on the other.
        assert_eq!(
            resolved("a\u{05D0}!\u{200B}!\u{05D0}"),
            vec![(0, L), (1, R), (0, L), (0, BN), (0, L), (1, R)]
        );

        let mut list = entities(&[(R, 0), (BN, 0), (R, 0)]);
        resolve_neutral(&mut list, 0);
        assert_eq!(classes(&list), vec![R, BN, R]);
    }

    #[test]
    fn test_boundary_neutral_blocks_terminators() {
        assert_eq!(resolved("$1"), vec![(0, L), (0, L)]);
        assert_eq!(resolved("$\u{200B}1"), vec![(0, L), (0, BN), (0, L)]);

        let mut list = entities(&[(ET, 0), (BN, 0), (EN, 0)]);
        resolve_weak(&mut list, 0);
        assert_eq!(classes(&list), vec![ON, BN, L]);
    }

    #[test]
    fn test_overridden_boundary_neutral_is_strong() {
        // U+00AD under RLO is an R entity at level 1, so the digit after the
        // PDF starts a run with sor R and keeps its EN class.
        let mut text = vec![0x202E, 0x00AD, 0x202C];
        text.extend("2".encode_utf16());
        let mut list = build_runs(&text);
        resolve(&mut list, 0);
        let runs: Vec<_> = list.iter().map(|e| (e.start, e.end, e.level, e.class)).collect();
        assert_eq!(runs, vec![(1, 2, 1, R), (3, 4, 2, EN)]);

        assert_eq!(resolved("\u{00AD}2"), vec![(0, BN), (0, L)]);
    }

    #[test]
    fn test_resolve_mixed_line() {
        let text: Vec<u16> = "abc \u{05D0}\u{05D1}\u{05D2} 123".encode_utf16().collect();
        let mut list = build_runs(&text);
        resolve(&mut list, 0);
        let resolved: Vec<_> = list.iter().map(|e| (e.start, e.end, e.level, e.class)).collect();
        assert_eq!(
            resolved,
            vec![
                (0, 3, 0, L),
                (3, 4, 0, L),
                (4, 7, 1, R),
                (7, 8, 1, R),
                (8, 11, 2, EN),
            ]
        );
    }
}
