// Imports
use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg};

/// Integer margins around a rectangle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename = "margins")]
pub struct Margins {
    /// The left margin.
    pub left: i32,
    /// The top margin.
    pub top: i32,
    /// The right margin.
    pub right: i32,
    /// The bottom margin.
    pub bottom: i32,
}

impl Margins {
    /// New margins.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same margin on every side.
    pub const fn uniform(margin: i32) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Whether all margins are zero.
    pub fn is_null(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for Margins {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.left + rhs.left,
            self.top + rhs.top,
            self.right + rhs.right,
            self.bottom + rhs.bottom,
        )
    }
}

impl Neg for Margins {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.left, -self.top, -self.right, -self.bottom)
    }
}

/// Floating point margins around a rectangle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "marginsf")]
pub struct MarginsF {
    #[serde(rename = "left", with = "crate::serialize::f64_dp3")]
    /// The left margin.
    pub left: f64,
    #[serde(rename = "top", with = "crate::serialize::f64_dp3")]
    /// The top margin.
    pub top: f64,
    #[serde(rename = "right", with = "crate::serialize::f64_dp3")]
    /// The right margin.
    pub right: f64,
    #[serde(rename = "bottom", with = "crate::serialize::f64_dp3")]
    /// The bottom margin.
    pub bottom: f64,
}

impl MarginsF {
    /// New margins.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same margin on every side.
    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Whether all margins are zero.
    pub fn is_null(&self) -> bool {
        self.left == 0.0 && self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0
    }
}

impl From<Margins> for MarginsF {
    fn from(margins: Margins) -> Self {
        Self::new(
            f64::from(margins.left),
            f64::from(margins.top),
            f64::from(margins.right),
            f64::from(margins.bottom),
        )
    }
}

impl Neg for MarginsF {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.left, -self.top, -self.right, -self.bottom)
    }
}
