//! Output encoders (PNG, SVG, ASCII text).

mod ascii;
mod png_encoder;
mod svg;

pub use ascii::AsciiGrid;
pub use png_encoder::PngEncoder;
pub use svg::{SvgEncoder, TextAnchor};
