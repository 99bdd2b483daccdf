//! Option store: the ordered list of labelled choices on the wheel.
//!
//! The store is plain data. It does not know whether a spin is in flight;
//! the spinning guard lives in [`crate::engine::WheelCore`], which is the only
//! caller that mutates a live store.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::palette;

/// Unique identifier for an option. Stable for the option's lifetime.
pub type OptionId = Uuid;

/// One labelled choice. Also the persisted record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelOption {
    pub id: OptionId,
    /// Trimmed, non-empty label.
    pub text: String,
    /// Palette slot assigned at creation. Never recomputed.
    pub color_index: usize,
}

impl WheelOption {
    /// CSS colour of this option's wedge.
    #[must_use]
    pub fn color(&self) -> &'static str {
        palette::color(self.color_index)
    }
}

/// Ordered collection of options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionStore {
    entries: Vec<WheelOption>,
}

impl OptionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new option. Returns `None` (and leaves the store untouched)
    /// when `text` is blank after trimming.
    pub fn add(&mut self, text: &str) -> Option<OptionId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let option = WheelOption {
            id: Uuid::new_v4(),
            text: text.to_owned(),
            color_index: palette::color_index_for(self.entries.len()),
        };
        let id = option.id;
        self.entries.push(option);
        Some(id)
    }

    /// Remove an option by id, preserving the order of the rest.
    pub fn remove(&mut self, id: &OptionId) -> Option<WheelOption> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }

    /// Uniform in-place permutation (Fisher–Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.entries.shuffle(rng);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace the contents with previously persisted records.
    ///
    /// Records with blank text are dropped and text is re-trimmed. When two
    /// records share an id the first one wins.
    pub fn load(&mut self, records: Vec<WheelOption>) {
        let mut seen = HashSet::with_capacity(records.len());
        self.entries = records
            .into_iter()
            .filter_map(|mut record| {
                let trimmed = record.text.trim();
                if trimmed.is_empty() || !seen.insert(record.id) {
                    return None;
                }
                if trimmed.len() != record.text.len() {
                    record.text = trimmed.to_owned();
                }
                Some(record)
            })
            .collect();
    }

    /// Index of the option with `id`.
    #[must_use]
    pub fn position(&self, id: &OptionId) -> Option<usize> {
        self.entries.iter().position(|o| o.id == *id)
    }

    #[must_use]
    pub fn get(&self, id: &OptionId) -> Option<&WheelOption> {
        self.entries.iter().find(|o| o.id == *id)
    }

    /// Option at a wheel segment index.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&WheelOption> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn contains(&self, id: &OptionId) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[WheelOption] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &WheelOption> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
