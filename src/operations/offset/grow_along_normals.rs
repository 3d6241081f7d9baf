use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::{CurveSource, Polyline};

use super::{Displacement, LengthPolicy, OffsetParams};

/// Moves every vertex along its own normal by a per-vertex distance.
///
/// No corner correction is applied; this is the cheap offset used to build
/// the two rails of a stroke. The result is a transformed copy of the
/// source with the same closedness.
#[derive(Debug)]
pub struct GrowAlongNormals<'a, C: CurveSource + ?Sized> {
    source: &'a C,
    displacement: Displacement,
    params: OffsetParams,
}

impl<'a, C: CurveSource + ?Sized> GrowAlongNormals<'a, C> {
    /// Creates a new offset operation.
    #[must_use]
    pub fn new(source: &'a C, displacement: impl Into<Displacement>) -> Self {
        Self {
            source,
            displacement: displacement.into(),
            params: OffsetParams::default(),
        }
    }

    /// Offsets every vertex by the same `length`.
    #[must_use]
    pub fn uniform(source: &'a C, length: f64) -> Self {
        Self::new(source, Displacement::Uniform(length))
    }

    /// Offsets vertex `i` by `lengths[i]`, or by 0 past the end of `lengths`.
    #[must_use]
    pub fn per_vertex(source: &'a C, lengths: &[f64]) -> Self {
        Self::new(source, Displacement::from(lengths))
    }

    /// Replaces the offset parameters.
    #[must_use]
    pub fn with_params(mut self, params: OffsetParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the offset. Polylines with fewer than 2 points are returned
    /// unchanged.
    #[must_use]
    pub fn execute(&self) -> Polyline {
        let copy = Polyline::from_source(self.source);
        let n = copy.len();
        if n < 2 {
            debug!(points = n, "grow along normals: too few points, returning copy");
            return copy;
        }

        if let Some(len) = self.displacement.explicit_len() {
            if len < n {
                trace!(values = len, points = n, "zero-filling missing displacements");
            }
        }

        copy.map_points(|i, p| p + self.source.normal_at(i) * self.displacement.value_at(i))
    }

    /// Executes the offset, honouring [`LengthPolicy::Strict`].
    ///
    /// # Errors
    ///
    /// Returns `OperationError::LengthMismatch` under the strict policy if a
    /// per-vertex displacement does not have exactly one value per point.
    pub fn execute_checked(&self) -> Result<Polyline> {
        if self.params.length_policy == LengthPolicy::Strict {
            let expected = self.source.point_count();
            if let Some(actual) = self.displacement.explicit_len() {
                if actual != expected {
                    return Err(OperationError::LengthMismatch { expected, actual }.into());
                }
            }
        }
        Ok(self.execute())
    }
}
