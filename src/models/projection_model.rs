use crate::types::{SparseVector, TermId};
use crate::Error;
use std::collections::HashMap;

/// A fixed linear map from weighted term space into an N-dimensional semantic space.
pub trait ProjectionModel: Send + Sync {
    /// The dimension N of the projected space, dimension 0 included.
    fn dimension(&self) -> usize;

    /// Projects a weighted sparse term vector into a dense vector of `dimension()` components.
    fn project(&self, weighted_terms: &SparseVector) -> Vec<f64>;
}

/// Latent-semantic projection: one dense row per term, and a document's projection is the
/// weighted sum of the rows of its terms. Terms without a row contribute nothing.
#[derive(Debug, Clone)]
pub struct LsaProjection {
    dimension: usize,
    rows: HashMap<TermId, Vec<f64>>,
}

impl LsaProjection {
    /// # Errors
    /// Returns an error if any row does not have exactly `dimension` components.
    pub fn new(dimension: usize, rows: HashMap<TermId, Vec<f64>>) -> Result<Self, Error> {
        if let Some(row) = rows.values().find(|row| row.len() != dimension) {
            return Err(Error::DimensionMismatch {
                expected: dimension,
                found: row.len(),
            });
        }

        Ok(Self { dimension, rows })
    }

    pub fn row(&self, term_id: TermId) -> Option<&[f64]> {
        self.rows.get(&term_id).map(|row| row.as_slice())
    }
}

impl ProjectionModel for LsaProjection {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn project(&self, weighted_terms: &SparseVector) -> Vec<f64> {
        let mut projected = vec![0.0; self.dimension];

        for &(term_id, weight) in weighted_terms {
            if let Some(row) = self.row(term_id) {
                for (component, &value) in projected.iter_mut().zip(row) {
                    *component += weight * value;
                }
            }
        }

        projected
    }
}
