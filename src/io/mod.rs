mod polyline_document;

pub use polyline_document::{load, save, try_load, try_save, PolylineDocument};
