use serde::{Deserialize, Serialize};

use crate::core::{Placement, RangeSpec};
use crate::error::{PlotError, PlotResult};

/// Serializable frame configuration: percentage placement plus data-range
/// bounds.
///
/// The JSON shape is a stable contract so frame layouts can be stored next to
/// the data they present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSpec {
    pub placement: Placement,
    #[serde(default)]
    pub range: RangeSpec,
}

impl FrameSpec {
    /// Spec with all-auto data bounds.
    #[must_use]
    pub const fn new(placement: Placement) -> Self {
        Self {
            placement,
            range: RangeSpec::auto(),
        }
    }

    #[must_use]
    pub const fn with_range(mut self, range: RangeSpec) -> Self {
        self.range = range;
        self
    }

    pub fn validate(self) -> PlotResult<()> {
        self.placement.validate()?;
        self.range.validate()
    }

    pub fn to_json_pretty(self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize frame spec: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let spec: Self = serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse frame spec: {e}")))?;
        spec.validate()?;
        Ok(spec)
    }
}
