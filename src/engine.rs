//! True Damerau-Levenshtein distance over a reusable workspace.
//!
//! Unlike the optimal string alignment variant, the true distance lets a
//! transposed pair be edited again, so `"ca"` -> `"abc"` costs 2 instead of 3.
//! The computation follows Lowrance and Wagner: a `(m+2) x (n+2)` cost matrix
//! with a sentinel border, plus a table recording the last row at which each
//! character occurred in the first input.
//!
//! An engine allocates its matrix once, sized for its `max_size`, and reuses it
//! for every call. Inputs are compared per Unicode scalar value (`char`), and
//! lengths are measured in `char`s.
//!
//! # Concurrency
//!
//! [`DamerauLevenshtein::distance`] takes `&mut self`: one call at a time per
//! engine. Use one engine per thread, or wrap a shared engine in a lock.

use std::fmt;

use ahash::AHashMap;
use log::{debug, trace};

use crate::config::{DEFAULT_MAX_SIZE, EngineConfig};
use crate::error::{Result, TdlError};

/// A reusable true Damerau-Levenshtein distance engine.
pub struct DamerauLevenshtein {
    max_size: usize,
    /// Row length of `matrix`, always `max_size + 2`.
    stride: usize,
    matrix: Vec<usize>,
    /// Last 1-based row of the first input holding each character.
    last_seen: AHashMap<char, usize>,
    a_buf: Vec<char>,
    b_buf: Vec<char>,
}

impl DamerauLevenshtein {
    /// Create an engine accepting inputs of up to `max_size` characters.
    ///
    /// Fails with [`TdlError::InvalidArgument`] when `max_size` is zero.
    pub fn new(max_size: usize) -> Result<Self> {
        Self::with_config(&EngineConfig::new(max_size))
    }

    /// Create an engine from a configuration.
    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::allocate(config.max_size))
    }

    fn allocate(max_size: usize) -> Self {
        let stride = max_size + 2;
        debug!("Allocating {stride}x{stride} distance workspace (max_size={max_size})");

        DamerauLevenshtein {
            max_size,
            stride,
            matrix: vec![0; stride * stride],
            last_seen: AHashMap::new(),
            a_buf: Vec::with_capacity(max_size),
            b_buf: Vec::with_capacity(max_size),
        }
    }

    /// Longest input, in characters, this engine accepts.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Calculate the true Damerau-Levenshtein distance between `a` and `b`.
    ///
    /// An empty input short-circuits to the other input's length. Otherwise,
    /// an input longer than [`max_size`](Self::max_size) yields
    /// [`TdlError::CapacityExceeded`].
    ///
    /// ```
    /// use tdl::DamerauLevenshtein;
    ///
    /// let mut engine = DamerauLevenshtein::new(32).unwrap();
    /// assert_eq!(engine.distance("ab", "ba").unwrap(), 1);
    /// assert_eq!(engine.distance("kitten", "sitting").unwrap(), 3);
    /// ```
    pub fn distance(&mut self, a: &str, b: &str) -> Result<usize> {
        let len_a = a.chars().count();
        let len_b = b.chars().count();

        if len_a == 0 {
            return Ok(len_b);
        }
        if len_b == 0 {
            return Ok(len_a);
        }
        self.check_capacity(len_a)?;
        self.check_capacity(len_b)?;

        // Decode into the owned buffers; taken out so `compute` can borrow self.
        let mut a_buf = std::mem::take(&mut self.a_buf);
        let mut b_buf = std::mem::take(&mut self.b_buf);
        a_buf.clear();
        a_buf.extend(a.chars());
        b_buf.clear();
        b_buf.extend(b.chars());

        let distance = self.compute(&a_buf, &b_buf);

        self.a_buf = a_buf;
        self.b_buf = b_buf;
        Ok(distance)
    }

    /// Same as [`distance`](Self::distance) for already decoded sequences.
    pub fn distance_chars(&mut self, a: &[char], b: &[char]) -> Result<usize> {
        if a.is_empty() {
            return Ok(b.len());
        }
        if b.is_empty() {
            return Ok(a.len());
        }
        self.check_capacity(a.len())?;
        self.check_capacity(b.len())?;

        Ok(self.compute(a, b))
    }

    /// Normalized similarity between 0.0 and 1.0.
    /// 1.0 means identical strings, 0.0 means completely different.
    pub fn similarity(&mut self, a: &str, b: &str) -> Result<f64> {
        let max_len = a.chars().count().max(b.chars().count());
        let distance = self.distance(a, b)?;

        if max_len == 0 {
            return Ok(1.0);
        }
        Ok(1.0 - distance as f64 / max_len as f64)
    }

    /// Check if `a` and `b` are within `max_distance` edits of each other.
    ///
    /// Inputs over capacity fail the same way [`distance`](Self::distance) does.
    pub fn is_within(&mut self, a: &str, b: &str, max_distance: usize) -> Result<bool> {
        let len_a = a.chars().count();
        let len_b = b.chars().count();
        if len_a > 0 && len_b > 0 {
            self.check_capacity(len_a)?;
            self.check_capacity(len_b)?;
        }

        // The distance is at least the length difference.
        if len_a.abs_diff(len_b) > max_distance {
            return Ok(false);
        }
        Ok(self.distance(a, b)? <= max_distance)
    }

    fn check_capacity(&self, len: usize) -> Result<()> {
        if len > self.max_size {
            trace!(
                "Rejecting input of length {len}, engine max_size is {}",
                self.max_size
            );
            return Err(TdlError::capacity_exceeded(len, self.max_size));
        }
        Ok(())
    }

    /// Fill the workspace for two non-empty inputs within capacity.
    fn compute(&mut self, a: &[char], b: &[char]) -> usize {
        let m = a.len();
        let n = b.len();
        let stride = self.stride;
        let d = &mut self.matrix;
        let at = |i: usize, j: usize| i * stride + j;

        let inf = m + n + 1;
        d[at(0, 0)] = inf;
        for i in 0..=m {
            d[at(i + 1, 1)] = i;
            d[at(i + 1, 0)] = inf;
        }
        for j in 0..=n {
            d[at(1, j + 1)] = j;
            d[at(0, j + 1)] = inf;
        }

        // Clearing keeps the allocation but drops characters from earlier calls.
        self.last_seen.clear();
        for &c in a.iter().chain(b) {
            self.last_seen.insert(c, 0);
        }

        for i in 1..=m {
            let ca = a[i - 1];
            // Last column in this row where a[i] matched.
            let mut db = 0;

            for j in 1..=n {
                let cb = b[j - 1];
                let i1 = self.last_seen.get(&cb).copied().unwrap_or(0);
                let j1 = db;

                let cost = if ca == cb {
                    db = j;
                    0
                } else {
                    1
                };

                let substitution = d[at(i, j)] + cost;
                let insertion = d[at(i + 1, j)] + 1;
                let deletion = d[at(i, j + 1)] + 1;
                // i1 < i and j1 < j, so neither gap underflows.
                let transposition = d[at(i1, j1)] + (i - i1 - 1) + 1 + (j - j1 - 1);

                d[at(i + 1, j + 1)] = substitution
                    .min(insertion)
                    .min(deletion)
                    .min(transposition);
            }

            self.last_seen.insert(ca, i);
        }

        d[at(m + 1, n + 1)]
    }
}

impl Default for DamerauLevenshtein {
    fn default() -> Self {
        Self::allocate(DEFAULT_MAX_SIZE)
    }
}

impl fmt::Debug for DamerauLevenshtein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DamerauLevenshtein")
            .field("max_size", &self.max_size)
            .field("tracked_chars", &self.last_seen.len())
            .finish()
    }
}
