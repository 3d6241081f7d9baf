use crate::error::Result;
use crate::geometry::{CurveSource, Polyline};
use crate::operations::offset::{Displacement, GrowAlongNormals, OffsetParams};

use super::{Mesh, StripMesh};

/// Strokes a polyline with uniform or per-vertex thickness.
///
/// Two rails are built by offsetting the source along its normals by `-t`
/// and `+t`, then stitched into a triangle strip with [`StripMesh`]. The
/// resulting ribbon is `2t` wide, centred on the source. Closedness of the
/// source carries into the first rail, so closed sources give a seamed loop.
#[derive(Debug)]
pub struct TessellateStroke<'a, C: CurveSource + ?Sized> {
    source: &'a C,
    thickness: Displacement,
    params: OffsetParams,
}

impl<'a, C: CurveSource + ?Sized> TessellateStroke<'a, C> {
    /// Creates a new stroke tessellation operation.
    #[must_use]
    pub fn new(source: &'a C, thickness: impl Into<Displacement>) -> Self {
        Self {
            source,
            thickness: thickness.into(),
            params: OffsetParams::default(),
        }
    }

    /// Replaces the offset and meshing parameters.
    #[must_use]
    pub fn with_params(mut self, params: OffsetParams) -> Self {
        self.params = params;
        self
    }

    /// Builds the negative and positive rails, in that order.
    #[must_use]
    pub fn rails(&self) -> (Polyline, Polyline) {
        let rail0 = GrowAlongNormals::new(self.source, self.thickness.negated()).execute();
        let rail1 = GrowAlongNormals::new(self.source, self.thickness.clone()).execute();
        (rail0, rail1)
    }

    /// Executes the tessellation, producing a triangle-strip ribbon.
    #[must_use]
    pub fn execute(&self) -> Mesh {
        let (rail0, rail1) = self.rails();
        StripMesh::new(&rail0, &rail1).execute()
    }

    /// Executes the tessellation, honouring the configured length policy.
    ///
    /// # Errors
    ///
    /// Returns an error under [`LengthPolicy::Strict`](crate::operations::LengthPolicy::Strict)
    /// if a per-vertex thickness does not have one value per source point.
    pub fn execute_checked(&self) -> Result<Mesh> {
        let rail0 = GrowAlongNormals::new(self.source, self.thickness.negated())
            .with_params(self.params)
            .execute_checked()?;
        let rail1 = GrowAlongNormals::new(self.source, self.thickness.clone())
            .with_params(self.params)
            .execute_checked()?;
        StripMesh::new(&rail0, &rail1)
            .with_params(self.params)
            .execute_checked()
    }
}
