use core::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::NativeFloat;

/// Largest absolute value a user supplied coordinate may take.
pub const COORD_LIMIT: NativeFloat = 200.0;

/// A control point as entered in the editor.
/// Its identity is its position in a `ControlPointSequence`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: NativeFloat,
    pub y: NativeFloat,
}

impl ControlPoint {
    pub fn new(x: NativeFloat, y: NativeFloat) -> Self {
        ControlPoint { x, y }
    }

    /// Creates a point only if both coordinates are numbers within
    /// [-COORD_LIMIT, COORD_LIMIT].
    pub fn checked(x: NativeFloat, y: NativeFloat) -> Result<Self> {
        Ok(ControlPoint {
            x: check_coordinate(x)?,
            y: check_coordinate(y)?,
        })
    }

    /// Re-validates a point that was constructed without checks (e.g. deserialized).
    pub fn validate(self) -> Result<Self> {
        Self::checked(self.x, self.y)
    }
}

fn check_coordinate(value: NativeFloat) -> Result<NativeFloat> {
    if value.is_nan() {
        return Err(Error::NotANumber(value.to_string()));
    }
    if !(-COORD_LIMIT..=COORD_LIMIT).contains(&value) {
        return Err(Error::InvalidCoordinate { value });
    }
    Ok(value)
}

/// Parse a coordinate typed by a user. A decimal comma is accepted in place
/// of the decimal point and surrounding whitespace is ignored.
pub fn parse_coordinate(input: &str) -> Result<NativeFloat> {
    let normalized = input.trim().replace(',', ".");
    let value: NativeFloat = normalized
        .parse()
        .map_err(|_| Error::NotANumber(input.to_string()))?;
    check_coordinate(value)
}

impl Add for ControlPoint {
    type Output = Self;

    fn add(self, other: ControlPoint) -> ControlPoint {
        ControlPoint {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for ControlPoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        ControlPoint {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<NativeFloat> for ControlPoint {
    type Output = ControlPoint;

    fn mul(self, rhs: NativeFloat) -> ControlPoint {
        ControlPoint {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl From<(NativeFloat, NativeFloat)> for ControlPoint {
    fn from((x, y): (NativeFloat, NativeFloat)) -> Self {
        ControlPoint { x, y }
    }
}
