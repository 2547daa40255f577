//! Remote segment commands
//!
//! Commands carry raw, unvalidated values exactly as they arrive from the
//! remote side. Validation and clamping happen when a command is applied to
//! an effect (see [`crate::command_processor`]).
//!
//! The address format follows the controller protocol:
//!
//! ```text
//! /effect/{effect}/segment/{segment}/{field}
//! /effect/{effect}/segment/create   id [position] [min] [max]
//! /effect/{effect}/segment/delete   id
//! /effect/{effect}/settings         led_count fps
//! ```

use crate::error::EffectError;
use crate::segment::{CONTROL_POINTS, SegmentId};

const ADDRESS_PREFIX: &str = "/effect/";

const FIELD_COLOR: &str = "color";
const FIELD_TRANSPARENCY: &str = "transparency";
const FIELD_LENGTH: &str = "length";
const FIELD_MOVE_SPEED: &str = "move_speed";
const FIELD_MOVE_RANGE: &str = "move_range";
const FIELD_INITIAL_POSITION: &str = "initial_position";
const FIELD_IS_EDGE_REFLECT: &str = "is_edge_reflect";
const FIELD_DIMMER_TIME: &str = "dimmer_time";
const FIELD_PRESET: &str = "preset";

/// A single command argument
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg {
    Int(i32),
    Float(f32),
}

impl Arg {
    /// Integer value; floats are truncated towards zero
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Int(value) => value,
            Self::Float(value) => value as i32,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn as_f32(self) -> f32 {
        match self {
            Self::Int(value) => value as f32,
            Self::Float(value) => value,
        }
    }
}

/// Segment field update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Param {
    Colors([i32; CONTROL_POINTS]),
    Transparency([f32; CONTROL_POINTS]),
    Lengths([i32; CONTROL_POINTS - 1]),
    Speed(f32),
    Range(i32, i32),
    Position(i32),
    EdgeReflect(bool),
    Dimmer([i32; 5]),
}

impl Param {
    /// Field name used in command addresses
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Colors(_) => FIELD_COLOR,
            Self::Transparency(_) => FIELD_TRANSPARENCY,
            Self::Lengths(_) => FIELD_LENGTH,
            Self::Speed(_) => FIELD_MOVE_SPEED,
            Self::Range(_, _) => FIELD_MOVE_RANGE,
            Self::Position(_) => FIELD_INITIAL_POSITION,
            Self::EdgeReflect(_) => FIELD_IS_EDGE_REFLECT,
            Self::Dimmer(_) => FIELD_DIMMER_TIME,
        }
    }
}

/// What a command does to its effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Create a default segment. A missing range means the full strip.
    Create {
        segment: SegmentId,
        position: i32,
        range: Option<(i32, i32)>,
    },
    /// Remove a segment
    Delete(SegmentId),
    /// Change one field of a segment
    Update { segment: SegmentId, param: Param },
    /// Apply a preset by raw id
    ApplyPreset { segment: SegmentId, preset: i32 },
    /// Change strip length and frame rate
    Settings { led_count: i32, fps: i32 },
}

/// Command addressed to one effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Command {
    pub effect: u16,
    pub action: Action,
}

impl Command {
    pub const fn new(effect: u16, action: Action) -> Self {
        Self { effect, action }
    }

    /// Shorthand for a segment field update
    pub const fn update(effect: u16, segment: SegmentId, param: Param) -> Self {
        Self::new(effect, Action::Update { segment, param })
    }

    /// Parse a command from its address and arguments.
    ///
    /// Extra arguments are ignored; missing ones are an error.
    pub fn parse(address: &str, args: &[Arg]) -> Result<Self, EffectError> {
        let rest = address
            .strip_prefix(ADDRESS_PREFIX)
            .ok_or(EffectError::UnknownAddress)?;
        let mut parts = rest.split('/');

        let effect = parse_id(parts.next())?;
        let action = match parts.next() {
            Some("settings") => {
                let [led_count, fps] = ints(args)?;
                Action::Settings { led_count, fps }
            }
            Some("segment") => match parts.next() {
                Some("create") => parse_create(args)?,
                Some("delete") => {
                    let [segment] = ints(args)?;
                    Action::Delete(segment_id(segment)?)
                }
                Some(segment) => {
                    let segment = parse_id(Some(segment))?;
                    let field = parts.next().ok_or(EffectError::UnknownAddress)?;
                    parse_field(segment, field, args)?
                }
                None => return Err(EffectError::UnknownAddress),
            },
            _ => return Err(EffectError::UnknownAddress),
        };

        if parts.next().is_some() {
            return Err(EffectError::UnknownAddress);
        }
        Ok(Self { effect, action })
    }
}

fn parse_create(args: &[Arg]) -> Result<Action, EffectError> {
    let [segment] = ints(args)?;
    let position = args.get(1).map_or(0, |arg| arg.as_i32());
    let range = args.get(2).map(|min| {
        let max = args.get(3).map_or(i32::MAX, |arg| arg.as_i32());
        (min.as_i32(), max)
    });
    Ok(Action::Create {
        segment: segment_id(segment)?,
        position,
        range,
    })
}

fn parse_field(segment: SegmentId, field: &str, args: &[Arg]) -> Result<Action, EffectError> {
    let param = match field {
        FIELD_COLOR => Param::Colors(ints(args)?),
        FIELD_TRANSPARENCY => Param::Transparency(floats(args)?),
        FIELD_LENGTH => Param::Lengths(ints(args)?),
        FIELD_MOVE_SPEED => {
            let [speed] = floats(args)?;
            Param::Speed(speed)
        }
        FIELD_MOVE_RANGE => {
            let [min, max] = ints(args)?;
            Param::Range(min, max)
        }
        FIELD_INITIAL_POSITION => {
            let [position] = ints(args)?;
            Param::Position(position)
        }
        FIELD_IS_EDGE_REFLECT => {
            let [reflect] = ints(args)?;
            Param::EdgeReflect(reflect != 0)
        }
        FIELD_DIMMER_TIME => Param::Dimmer(ints(args)?),
        FIELD_PRESET => {
            let [preset] = ints(args)?;
            return Ok(Action::ApplyPreset { segment, preset });
        }
        _ => return Err(EffectError::UnknownAddress),
    };
    Ok(Action::Update { segment, param })
}

fn parse_id(part: Option<&str>) -> Result<u16, EffectError> {
    part.and_then(|part| part.parse::<u16>().ok())
        .ok_or(EffectError::UnknownAddress)
}

fn segment_id(raw: i32) -> Result<SegmentId, EffectError> {
    SegmentId::try_from(raw).map_err(|_| EffectError::InvalidParameter("segment id out of range"))
}

fn ints<const N: usize>(args: &[Arg]) -> Result<[i32; N], EffectError> {
    let args = leading::<N>(args)?;
    Ok(args.map(Arg::as_i32))
}

fn floats<const N: usize>(args: &[Arg]) -> Result<[f32; N], EffectError> {
    let args = leading::<N>(args)?;
    Ok(args.map(Arg::as_f32))
}

fn leading<const N: usize>(args: &[Arg]) -> Result<[Arg; N], EffectError> {
    args.get(..N)
        .and_then(|args| <[Arg; N]>::try_from(args).ok())
        .ok_or(EffectError::InvalidParameter("missing argument"))
}
