pub mod draw;
pub mod geom;
pub mod io;
pub mod style;

// Prelude
pub use geom::face::Face;
pub use geom::point::Point;
pub use style::{Style, StyleSource, StyleToken};
// Reading and drawing
pub use draw::config::PlotConfig;
pub use draw::plot_faces;
pub use io::{FaceFile, read_faces};
