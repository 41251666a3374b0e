//! The nine sample quantile definitions

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sample quantile definition, numbered as in Hyndman & Fan (1996)
///
/// Types 1-3 are discontinuous and always return an existing order statistic
/// (type 2 averages two of them on exact ties). Types 4-9 interpolate linearly
/// between two adjacent order statistics using per-type (α, β) parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum QuantileType {
    /// Inverse of the empirical CDF
    Type1 = 1,
    /// Inverse empirical CDF, averaging at discontinuities
    Type2 = 2,
    /// Nearest even order statistic (SAS definition)
    Type3 = 3,
    /// Linear interpolation of the empirical CDF
    Type4 = 4,
    /// Piecewise linear, knots at the midpoints
    Type5 = 5,
    /// Mean-unbiased plotting positions (Weibull)
    Type6 = 6,
    /// Mode-based (R and NumPy default)
    #[default]
    Type7 = 7,
    /// Approximately median-unbiased
    Type8 = 8,
    /// Approximately unbiased for normal data (Blom)
    Type9 = 9,
}

impl QuantileType {
    /// All nine definitions in order
    pub const ALL: [QuantileType; 9] = [
        QuantileType::Type1,
        QuantileType::Type2,
        QuantileType::Type3,
        QuantileType::Type4,
        QuantileType::Type5,
        QuantileType::Type6,
        QuantileType::Type7,
        QuantileType::Type8,
        QuantileType::Type9,
    ];

    /// Numeric identifier 1..=9
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Whether the definition selects existing order statistics
    pub fn is_discrete(self) -> bool {
        matches!(self, Self::Type1 | Self::Type2 | Self::Type3)
    }

    /// Whether the definition interpolates between order statistics
    pub fn is_continuous(self) -> bool {
        !self.is_discrete()
    }

    /// (α, β) plotting-position parameters, `None` for discrete types
    pub fn hyndman_fan_parameters(self) -> Option<(f64, f64)> {
        match self {
            Self::Type1 | Self::Type2 | Self::Type3 => None,
            Self::Type4 => Some((0.0, 1.0)),
            Self::Type5 => Some((0.5, 0.5)),
            Self::Type6 => Some((0.0, 0.0)),
            Self::Type7 => Some((1.0, 1.0)),
            Self::Type8 => Some((1.0 / 3.0, 1.0 / 3.0)),
            Self::Type9 => Some((3.0 / 8.0, 3.0 / 8.0)),
        }
    }
}

impl TryFrom<i32> for QuantileType {
    type Error = Error;

    fn try_from(ty: i32) -> Result<Self, Self::Error> {
        match ty {
            1 => Ok(Self::Type1),
            2 => Ok(Self::Type2),
            3 => Ok(Self::Type3),
            4 => Ok(Self::Type4),
            5 => Ok(Self::Type5),
            6 => Ok(Self::Type6),
            7 => Ok(Self::Type7),
            8 => Ok(Self::Type8),
            9 => Ok(Self::Type9),
            _ => Err(Error::InvalidType { ty }),
        }
    }
}

impl TryFrom<u8> for QuantileType {
    type Error = Error;

    fn try_from(ty: u8) -> Result<Self, Self::Error> {
        Self::try_from(i32::from(ty))
    }
}

impl From<QuantileType> for u8 {
    fn from(ty: QuantileType) -> Self {
        ty.number()
    }
}

impl fmt::Display for QuantileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {}", self.number())
    }
}
