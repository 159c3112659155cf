//! Service trait definitions for dependency injection
//!
//! Randomness is abstracted behind a trait so tests can pin template selection

/// Source of uniformly distributed template indices
#[mockall::automock]
pub trait RandomSource: Send + Sync {
    /// Pick an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&self, len: usize) -> usize;
}
