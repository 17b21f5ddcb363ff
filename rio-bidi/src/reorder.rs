// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visual reordering of resolved entities (rule L2).

use crate::class::BidiLevel;
use crate::entity::Entity;

/// Returns `entities` in visual order.
///
/// Runs are moved as a whole; the code units inside a run keep their
/// logical order.
pub fn reorder(entities: &[Entity]) -> Vec<Entity> {
    let mut order = vec![0; entities.len()];
    reorder_indices(&mut order, |i| entities[i].level);
    order.into_iter().map(|i| entities[i]).collect()
}

/// Computes an ordering for a sequence of bidi runs based on levels.
///
/// `order` is overwritten with the logical index of the run painted at each
/// visual position. From the highest level down to 1, every maximal sequence
/// at that level or higher is reversed.
pub fn reorder_indices<F>(order: &mut [usize], levels: F)
where
    F: Fn(usize) -> BidiLevel,
{
    let len = order.len();
    let mut max_level: BidiLevel = 0;
    for (idx, item) in order.iter_mut().enumerate() {
        *item = idx;
        max_level = max_level.max(levels(idx));
    }
    for level in (1..=max_level).rev() {
        let mut i = 0;
        while i < len {
            if levels(order[i]) >= level {
                let mut end = i + 1;
                while end < len && levels(order[end]) >= level {
                    end += 1;
                }
                order[i..end].reverse();
                i = end;
            }
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::BidiClass::*;
    use pretty_assertions::assert_eq;

    fn order_of(levels: &[BidiLevel]) -> Vec<usize> {
        let mut order = vec![0; levels.len()];
        reorder_indices(&mut order, |i| levels[i]);
        order
    }

    #[test]
    fn test_all_ltr_keeps_order() {
        assert_eq!(order_of(&[0, 0, 0]), vec![0, 1, 2]);
        assert!(order_of(&[]).is_empty());
    }

    #[test]
    fn test_rtl_run_between_ltr() {
        assert_eq!(order_of(&[0, 1, 1, 1, 0]), vec![0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_numbers_inside_rtl() {
        // Latin, Hebrew, digits: the digits keep their place after the
        // Hebrew run is reversed around them.
        assert_eq!(order_of(&[0, 1, 2]), vec![0, 2, 1]);
        assert_eq!(order_of(&[1, 2, 1]), vec![2, 1, 0]);
    }

    #[test]
    fn test_nested_levels() {
        assert_eq!(order_of(&[1, 2, 2, 3, 1]), vec![4, 1, 2, 3, 0]);
        assert_eq!(order_of(&[2, 2]), vec![0, 1]);
    }

    #[test]
    fn test_reorder_is_a_permutation() {
        let entities = vec![
            Entity::new(0, 2, 0, L),
            Entity::new(2, 5, 1, R),
            Entity::new(5, 6, 1, R),
            Entity::new(6, 8, 2, EN),
            Entity::new(8, 9, 0, L),
        ];
        let visual = reorder(&entities);
        assert_eq!(visual.len(), entities.len());
        for entity in &entities {
            assert_eq!(visual.iter().filter(|e| *e == entity).count(), 1);
        }
        let starts: Vec<_> = visual.iter().map(|e| e.start).collect();
        assert_eq!(starts, vec![0, 6, 5, 2, 8]);
    }
}
