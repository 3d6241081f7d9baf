mod draw_normals;

pub use draw_normals::{DrawNormals, LineSink};
