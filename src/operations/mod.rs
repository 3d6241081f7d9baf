pub mod offset;

pub use offset::{Displacement, Grow, GrowAlongNormals, LengthPolicy, OffsetParams};
