use tracing::debug;

use crate::api::frame::Frame;
use crate::api::spec::FrameSpec;
use crate::core::{CanvasSize, Placement, RangeSpec};
use crate::error::{PlotError, PlotResult};
use crate::render::{AttributeSet, SvgWriter};

/// Identifier of the implicit root frame covering the whole canvas.
pub const ROOT_FRAME_ID: &str = "canvas";

/// Index of one frame in a document's paint-order sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(usize);

/// One composed SVG document: a shared canvas and an append-only sequence of
/// frames in paint order.
///
/// Frame creation always appends to the tail of the shared sequence, so
/// later-created frames paint over earlier ones regardless of where the
/// creating call originated. There is no frame tree.
#[derive(Debug, Clone)]
pub struct Document {
    canvas: CanvasSize,
    frames: Vec<Frame>,
    stylesheet: Option<String>,
    writer: SvgWriter,
}

impl Document {
    /// Creates a document whose root frame covers the whole canvas with
    /// pixel-range data bounds.
    pub fn new(width: u32, height: u32) -> PlotResult<Self> {
        Self::with_attributes(width, height, AttributeSet::new())
    }

    /// Like [`Document::new`] with styling overrides for the root frame
    /// background.
    pub fn with_attributes(
        width: u32,
        height: u32,
        attributes: AttributeSet,
    ) -> PlotResult<Self> {
        let canvas = CanvasSize::new(width, height);
        if !canvas.is_valid() {
            return Err(PlotError::InvalidCanvas { width, height });
        }

        let root = Frame::new(
            ROOT_FRAME_ID,
            Placement::full_canvas(),
            RangeSpec::fixed(0.0, f64::from(width), 0.0, f64::from(height)),
            attributes,
            true,
        );

        Ok(Self {
            canvas,
            frames: vec![root],
            stylesheet: None,
            writer: SvgWriter::default(),
        })
    }

    /// References an external stylesheet from the document header.
    #[must_use]
    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = Some(href.into());
        self
    }

    /// Replaces the markup writer, e.g. to change coordinate precision.
    #[must_use]
    pub fn with_writer(mut self, writer: SvgWriter) -> Self {
        self.writer = writer;
        self
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn root(&self) -> FrameId {
        FrameId(0)
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame ids in paint order.
    #[must_use]
    pub fn frame_order(&self) -> Vec<&str> {
        self.frames.iter().map(Frame::id).collect()
    }

    /// Appends a new frame to the tail of the paint-order sequence and
    /// returns its handle. The new frame inherits only the canvas pixel
    /// dimensions.
    ///
    /// Frame ids should be unique within the document; clip-path references
    /// are derived from them.
    pub fn add_frame(
        &mut self,
        id: &str,
        spec: FrameSpec,
        attributes: AttributeSet,
    ) -> PlotResult<FrameId> {
        spec.validate()?;
        self.frames
            .push(Frame::new(id, spec.placement, spec.range, attributes, false));
        let index = self.frames.len() - 1;
        debug!(frame = id, index, "append frame");
        Ok(FrameId(index))
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this document.
    #[must_use]
    pub fn frame(&self, id: FrameId) -> &Frame {
        &self.frames[id.0]
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this document.
    #[must_use]
    pub fn frame_mut(&mut self, id: FrameId) -> &mut Frame {
        &mut self.frames[id.0]
    }

    /// Resolves every frame in paint order into one SVG document string.
    ///
    /// Rendering reads recorded state without mutating it: invoked twice on an
    /// unmodified document it returns byte-identical output.
    pub fn render(&self) -> PlotResult<String> {
        debug!(
            frames = self.frames.len(),
            width = self.canvas.width,
            height = self.canvas.height,
            "render svg document"
        );
        let mut parts = Vec::with_capacity(self.frames.len() + 2);
        parts.push(self.writer.header(self.canvas, self.stylesheet.as_deref()));
        for frame in &self.frames {
            parts.push(frame.render(self.canvas, self.writer)?);
        }
        parts.push(self.writer.footer().to_owned());
        Ok(parts.join("\n"))
    }
}
