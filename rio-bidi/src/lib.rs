// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Unicode bidirectional reordering for Rio.
//!
//! [`BidiEngine`] takes a line of UTF-16 code units in logical order and
//! returns the runs to paint from left to right. Internally the text goes
//! through four stages:
//!
//! * classification of every code unit ([`classify`]),
//! * segmentation into entities under the explicit embedding and override
//!   controls ([`builder`]),
//! * weak, neutral and implicit resolution ([`resolver`]),
//! * reversal of runs by level ([`reorder`]).
//!
//! The engine follows the older revision of the algorithm: no bracket
//! pairs, no isolates, and no mirroring of individual characters. Surrogate
//! pairs are not combined, each code unit is classified on its own.
//!
//! # Example
//!
//! ```
//! let text: Vec<u16> = "abc \u{05D0}\u{05D1} 12".encode_utf16().collect();
//! let runs = rio_bidi::process(&text);
//! let levels: Vec<u8> = runs.iter().map(|run| run.level).collect();
//! assert_eq!(levels, vec![0, 0, 2, 1, 1]);
//! ```

pub mod builder;
pub mod class;
pub mod classify;
pub mod config;
pub mod entity;
pub mod error;
pub mod reorder;
pub mod resolver;
mod table;

pub use builder::{build_runs, paragraph_level, DirectionalOverride, Remember};
pub use class::{type_from_level, BidiCategory, BidiClass, BidiLevel};
pub use classify::{classify, Classify};
pub use config::{BaseDirection, Config};
pub use entity::{Entity, VisualRun};
pub use error::ConfigError;
pub use reorder::reorder;
pub use resolver::{resolve_implicit, resolve_neutral, resolve_weak};

use builder::RunBuilder;

/// Reorders a line with a default engine.
pub fn process(text: &[u16]) -> Vec<VisualRun<'_>> {
    BidiEngine::new().process(text)
}

/// Bidirectional engine with reusable scratch state.
///
/// The entity list is cleared on every call, nothing carries over from one
/// line to the next. Calls take `&mut self`, so one engine serves one
/// thread at a time.
pub struct BidiEngine {
    config: config::Engine,
    builder: RunBuilder,
    entities: Vec<Entity>,
    paragraph_level: BidiLevel,
}

impl Default for BidiEngine {
    fn default() -> Self {
        Self::with_config(&config::Engine::default())
    }
}

impl BidiEngine {
    /// Creates a new engine with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given base direction and maximum depth.
    pub fn with_config(config: &config::Engine) -> Self {
        Self {
            config: *config,
            builder: RunBuilder::new(0, config.max_depth()),
            entities: Vec::new(),
            paragraph_level: 0,
        }
    }

    /// Paragraph level of the last processed line.
    #[inline]
    pub fn paragraph_level(&self) -> BidiLevel {
        self.paragraph_level
    }

    /// Resolved entities of the last processed line, in logical order.
    #[inline]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Resolves `text` and returns its entities in logical order.
    pub fn logical_runs(&mut self, text: &[u16]) -> Vec<Entity> {
        self.resolve(text);
        self.entities.clone()
    }

    /// Resolves `text` and returns its runs in visual order.
    pub fn process<'a>(&mut self, text: &'a [u16]) -> Vec<VisualRun<'a>> {
        self.resolve(text);
        reorder::reorder(&self.entities)
            .iter()
            .map(|entity| VisualRun::from_entity(entity, text))
            .collect()
    }

    /// Reorders a string for display, concatenating the visual runs.
    pub fn visual_string(&mut self, text: &str) -> String {
        let units: Vec<u16> = text.encode_utf16().collect();
        self.process(&units)
            .iter()
            .map(VisualRun::to_string_lossy)
            .collect()
    }

    fn resolve(&mut self, text: &[u16]) {
        self.entities.clear();
        self.paragraph_level = self
            .config
            .base_direction
            .level()
            .unwrap_or_else(|| paragraph_level(text));
        if text.is_empty() {
            return;
        }
        self.builder.reset(self.paragraph_level);
        self.builder.build(text, &mut self.entities);
        resolver::resolve(&mut self.entities, self.paragraph_level);
        tracing::debug!(
            "resolved {} code units into {} entities at paragraph level {}",
            text.len(),
            self.entities.len(),
            self.paragraph_level
        );
    }
}
