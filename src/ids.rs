//! Shape id generation.
//!
//! Ids come from an injectable [`IdSource`] so tests can predict them.

use crate::types::ShapeId;
use std::collections::HashSet;
use uuid::Uuid;

/// Produces fresh shape ids. Every id returned by one source is distinct.
pub trait IdSource {
    fn next_id(&mut self) -> ShapeId;
}

/// Monotonic counter starting at a given value.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next);
        self.next += 1;
        id
    }
}

/// Random ids taken from UUID v4 bits.
///
/// Remembers what it has issued and redraws on the (unlikely) collision.
#[derive(Debug, Default)]
pub struct RandomIds {
    issued: HashSet<u64>,
}

impl RandomIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for RandomIds {
    fn next_id(&mut self) -> ShapeId {
        loop {
            let (hi, _) = Uuid::new_v4().as_u64_pair();
            if self.issued.insert(hi) {
                return ShapeId(hi);
            }
        }
    }
}
