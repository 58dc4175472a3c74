// Imports
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// The maximum number of full rotations a shape is meant to keep track of.
///
/// Stored angles are reduced into a single turn, so this bound currently does not take part in normalization.
pub const MAX_ROTATIONS: u32 = 16;

/// Degrees of a full turn.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Normalizes integer degrees into the range [0, 360).
pub fn normalize_degrees_i32(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// Normalizes degrees into the range [0.0, 360.0).
///
/// Non-finite input normalizes to 0.0.
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let normalized = degrees % FULL_TURN_DEG;
    let normalized = if normalized < 0.0 {
        normalized + FULL_TURN_DEG
    } else {
        normalized
    };
    // adding a tiny negative remainder to a full turn rounds up to 360.0,
    // whole negative turns leave -0.0
    if normalized >= FULL_TURN_DEG || normalized == 0.0 {
        0.0
    } else {
        normalized
    }
}

/// Converts radians to degrees and normalizes them into the range [0.0, 360.0).
pub fn normalize_radians(radians: f64) -> f64 {
    normalize_degrees(radians.to_degrees())
}

/// Rounds the angle to whole degrees and normalizes into the range [0, 360).
pub fn normalize_to_whole_degrees(angle: Angle) -> i32 {
    // normalize first so the cast never saturates, then again since rounding can land on 360
    normalize_degrees_i32(normalize_degrees(angle.as_degrees()).round() as i32)
}

/// An angle, either absolute or as a delta.
///
/// Constructed from degrees or radians, so operations taking an angle don't need separate overloads for each unit.
/// The value is not normalized, normalizing happens when it is stored in a shape.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(default, rename = "angle")]
pub struct Angle {
    #[serde(rename = "degrees", with = "crate::serialize::f64_dp3")]
    degrees: f64,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Self = Self { degrees: 0.0 };

    /// A new angle from degrees.
    pub const fn degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    /// A new angle from radians.
    pub fn radians(radians: f64) -> Self {
        Self {
            degrees: radians.to_degrees(),
        }
    }

    /// The angle in degrees.
    pub const fn as_degrees(&self) -> f64 {
        self.degrees
    }

    /// The angle in radians.
    pub fn as_radians(&self) -> f64 {
        self.degrees.to_radians()
    }

    /// The angle reduced into [0.0, 360.0) degrees.
    pub fn normalized(self) -> Self {
        Self::degrees(normalize_degrees(self.degrees))
    }

    /// Approximate equality of the normalized angles.
    pub fn approx_eq(&self, other: &Self) -> bool {
        approx::relative_eq!(
            normalize_degrees(self.degrees),
            normalize_degrees(other.degrees)
        )
    }
}

impl From<i32> for Angle {
    fn from(degrees: i32) -> Self {
        Self::degrees(f64::from(degrees))
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::degrees(self.degrees + rhs.degrees)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.degrees += rhs.degrees;
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::degrees(self.degrees - rhs.degrees)
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        self.degrees -= rhs.degrees;
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::degrees(-self.degrees)
    }
}
