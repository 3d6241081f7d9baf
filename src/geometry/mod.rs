mod curve_source;
pub mod polyline;

pub use curve_source::CurveSource;
pub use polyline::Polyline;
