//! services/backend/src/session/compare.rs
//!
//! The side-by-side comparison basket. Session-local only, never persisted.

use rentflow_core::domain::Property;

const MAX_COMPARE: usize = 3;

/// Holds up to three listings picked for comparison.
#[derive(Debug, Default)]
pub struct CompareList {
    items: Vec<Property>,
}

impl CompareList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listing to the basket. Returns false when the basket is full.
    /// Re-adding a listing that is already present is a quiet no-op.
    pub fn add(&mut self, property: Property) -> bool {
        if self.items.len() >= MAX_COMPARE {
            return false;
        }
        if !self.items.iter().any(|p| p.id == property.id) {
            self.items.push(property);
        }
        true
    }

    pub fn remove(&mut self, property_id: &str) {
        self.items.retain(|p| p.id != property_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Property] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
