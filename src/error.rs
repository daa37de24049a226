use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

/// Axis identifier used by range diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("degenerate {axis} range in frame `{frame}`: {detail}")]
    DegenerateRange {
        frame: String,
        axis: Axis,
        detail: String,
    },

    #[error("spline resampling needs at least 2 points, got {count}")]
    InsufficientSamples { count: usize },

    #[error("singular linear system: near-zero pivot in column {column}")]
    SingularSystem { column: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
