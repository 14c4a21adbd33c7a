/// A vector in the shared semantic space.
///
/// Dimension 0 of a projection is always discarded, for corpus documents and folded queries
/// alike. `from_projection` is the only constructor, so both sides go through the same
/// reduction and stay comparable.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticVector(Vec<f64>);

impl SemanticVector {
    /// Builds a semantic vector from a raw N-dimensional projection, dropping dimension 0.
    pub fn from_projection(mut projected: Vec<f64>) -> Self {
        if !projected.is_empty() {
            projected.remove(0);
        }
        SemanticVector(projected)
    }

    /// The number of retained dimensions (N - 1).
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&component| component == 0.0)
    }
}
