//! Process-wide engine for quick one-off calls.
//!
//! The shared engine is created on first use with [`DEFAULT_MAX_SIZE`] and
//! guarded by a mutex, so every caller of [`distance`] is serialized behind a
//! single lock. It is meant for occasional calls from one thread. Code that
//! computes many distances, or computes them from several threads, should own
//! its own [`DamerauLevenshtein`] per thread instead.

use std::sync::LazyLock;

use parking_lot::Mutex;

use crate::config::DEFAULT_MAX_SIZE;
use crate::engine::DamerauLevenshtein;
use crate::error::Result;

static SHARED_ENGINE: LazyLock<Mutex<DamerauLevenshtein>> =
    LazyLock::new(|| Mutex::new(DamerauLevenshtein::default()));

/// Calculate the true Damerau-Levenshtein distance with the shared engine.
///
/// Inputs longer than [`DEFAULT_MAX_SIZE`] characters yield
/// [`crate::TdlError::CapacityExceeded`].
///
/// ```
/// assert_eq!(tdl::distance("ca", "abc").unwrap(), 2);
/// ```
pub fn distance(a: &str, b: &str) -> Result<usize> {
    SHARED_ENGINE.lock().distance(a, b)
}
