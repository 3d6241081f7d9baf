mod displacement;
mod grow;
mod grow_along_normals;

pub use displacement::Displacement;
pub use grow::Grow;
pub use grow_along_normals::GrowAlongNormals;

/// How mismatched input lengths are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LengthPolicy {
    /// Missing displacements are zero and longer rails are truncated.
    #[default]
    Lenient,
    /// Length mismatches are reported as errors by the checked entry points.
    Strict,
}

/// Parameters for offset and meshing operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetParams {
    /// Policy for displacement sequences and rails of differing length.
    pub length_policy: LengthPolicy,
}
