//! Weight-vector persistence.
//!
//! The on-disk format is a JSON array of exactly [`NUM_FEATURES`] floats.
//! A missing or malformed file is never fatal: the agent starts from the
//! zero vector and plays uninformatively until trained.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use crate::features::NUM_FEATURES;

/// Linear coefficients combined with a feature vector via dot product.
pub type WeightVector = [f64; NUM_FEATURES];

pub const ZERO_WEIGHTS: WeightVector = [0.0; NUM_FEATURES];

fn read(path: &Path) -> Result<WeightVector> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading weights from {}", path.display()))?;
    let weights: WeightVector = serde_json::from_str(&text)
        .with_context(|| format!("parsing weights from {}", path.display()))?;
    Ok(weights)
}

/// Load a weight vector, falling back to zeros on any failure.
pub fn load_or_default(path: &Path) -> WeightVector {
    match read(path) {
        Ok(weights) => weights,
        Err(err) => {
            warn!("{err:#}; starting from the zero vector");
            ZERO_WEIGHTS
        }
    }
}

pub fn save(path: &Path, weights: &WeightVector) -> Result<()> {
    let text = serde_json::to_string(weights)?;
    fs::write(path, text).with_context(|| format!("writing weights to {}", path.display()))?;
    Ok(())
}
