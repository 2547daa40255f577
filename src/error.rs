use thiserror::Error;

use crate::segment::SegmentId;

/// Errors reported by effect and command operations.
///
/// None of these abort rendering; a failed operation leaves the effect
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EffectError {
    /// The effect already holds its maximum number of segments
    #[error("segment capacity exceeded")]
    CapacityExceeded,
    /// No segment with this id exists in the effect
    #[error("segment {0} not found")]
    NotFound(SegmentId),
    /// A segment with this id already exists in the effect
    #[error("segment {0} already exists")]
    DuplicateId(SegmentId),
    /// The command is addressed to a different effect
    #[error("command addressed to effect {0}")]
    WrongEffect(u16),
    /// The preset id is not known
    #[error("unknown preset {0}")]
    UnknownPreset(i32),
    /// A parameter value cannot be brought into range
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    /// The command address does not match any known command
    #[error("unknown command address")]
    UnknownAddress,
}
