pub mod debug;
pub mod error;
pub mod geometry;
pub mod io;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{PolystrokeError, Result};
pub use geometry::{CurveSource, Polyline};
pub use operations::{Displacement, Grow, GrowAlongNormals, LengthPolicy, OffsetParams};
pub use tessellation::{Mesh, PrimitiveMode, StripMesh, TessellateStroke};
