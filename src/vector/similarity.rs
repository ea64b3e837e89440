//! Vector Similarity Functions
//!
//! Magnitude, dot product and cosine similarity over `f64` slices.
//!
//! Norms are accumulated over components divided by the largest absolute
//! component, so squaring neither overflows for values near `f64::MAX` nor
//! underflows to zero for subnormal-range values.

use crate::error::{Result, SimrankError};

/// Compute the Euclidean norm of a vector.
///
/// Defined for every vector; the zero vector has magnitude 0.
#[inline]
pub fn magnitude(v: &[f64]) -> f64 {
    let scale = max_abs(v);
    if scale == 0.0 {
        return 0.0;
    }
    scale * v.iter().map(|x| (x / scale).powi(2)).sum::<f64>().sqrt()
}

/// Largest absolute component, 0 for the zero (or empty) vector
#[inline]
fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0f64, |m, x| m.max(x.abs()))
}

/// Compute dot product of two vectors
///
/// Fails with [`SimrankError::DimensionMismatch`] when the lengths differ
/// instead of truncating to the shorter vector.
#[inline]
pub fn dot_product(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(SimrankError::mismatch(a.len(), b.len()));
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// Compute cosine similarity between two vectors
///
/// Returns value in range [-1, 1] where 1 means identical direction.
/// When either vector has zero magnitude the similarity is exactly `0.0`.
#[inline]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(SimrankError::mismatch(a.len(), b.len()));
    }

    let scale_a = max_abs(a);
    let scale_b = max_abs(b);
    if scale_a == 0.0 || scale_b == 0.0 {
        return Ok(0.0);
    }

    // Cosine is scale invariant; every scaled component lies in [-1, 1]
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let x = x / scale_a;
        let y = y / scale_b;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    // Rounding can push |a||b| just below |a·b|
    Ok((dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0))
}
