/// Per-vertex offset distance.
///
/// A single value broadcast to every vertex, or one value per vertex.
/// A per-vertex sequence may be shorter than the curve; vertices past its
/// end get no displacement.
#[derive(Debug, Clone, PartialEq)]
pub enum Displacement {
    Uniform(f64),
    PerVertex(Vec<f64>),
}

impl Displacement {
    /// Distance for the vertex at `index`.
    #[must_use]
    pub fn value_at(&self, index: usize) -> f64 {
        match self {
            Self::Uniform(v) => *v,
            Self::PerVertex(values) => values.get(index).copied().unwrap_or(0.0),
        }
    }

    /// Returns the displacement with every value negated.
    #[must_use]
    pub fn negated(&self) -> Self {
        match self {
            Self::Uniform(v) => Self::Uniform(-v),
            Self::PerVertex(values) => Self::PerVertex(values.iter().map(|v| -v).collect()),
        }
    }

    /// Number of explicit values, or `None` for a uniform displacement.
    #[must_use]
    pub fn explicit_len(&self) -> Option<usize> {
        match self {
            Self::Uniform(_) => None,
            Self::PerVertex(values) => Some(values.len()),
        }
    }
}

impl From<f64> for Displacement {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

impl From<Vec<f64>> for Displacement {
    fn from(values: Vec<f64>) -> Self {
        Self::PerVertex(values)
    }
}

impl From<&[f64]> for Displacement {
    fn from(values: &[f64]) -> Self {
        Self::PerVertex(values.to_vec())
    }
}
