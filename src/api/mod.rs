mod document;
mod frame;
mod intent;
mod spec;

pub use document::{Document, FrameId, ROOT_FRAME_ID};
pub use frame::Frame;
pub use intent::DrawIntent;
pub use spec::FrameSpec;
