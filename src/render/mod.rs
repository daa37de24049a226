mod attributes;
mod path;
mod svg;

pub use attributes::AttributeSet;
pub use path::{PathData, PathSeg};
pub use svg::{PolyKind, SvgWriter};

pub(crate) use svg::format_number;
