// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Measurement, PhysicalQuantity, UnitOfMeasure};

/// Angle unit with _rad_ as SI unit.
///
/// `TrueNorth` and `MagneticNorth` carry the same numeric degree value;
/// the tag only records which reference the angle is expressed against so
/// it can be displayed correctly (`090°T` vs. `090°M`). Arithmetic does not
/// convert between them: subtracting a magnetic variation from a true
/// course is an explicit operation in [`crate::route::leg`], not an
/// automatic unit conversion here.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleUnit {
    TrueNorth,
    MagneticNorth,
    Radians,
}

impl UnitOfMeasure<f32> for AngleUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Angle
    }

    fn si() -> Self {
        Self::Radians
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::TrueNorth => "°T",
            Self::MagneticNorth => "°M",
            Self::Radians => "rad",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        match to {
            Self::Radians => value,
            Self::TrueNorth | Self::MagneticNorth => normalize(value.to_degrees()),
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        match self {
            Self::Radians => *value,
            Self::TrueNorth | Self::MagneticNorth => value.to_radians(),
        }
    }
}

/// Normalizes a degree value to `[0, 360)`.
pub fn normalize(degrees: f32) -> f32 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// An angle, normalized to `[0, 360)` degrees when expressed in a compass
/// unit (`TrueNorth`/`MagneticNorth`).
pub type Angle = Measurement<f32, AngleUnit>;

impl Angle {
    /// Creates a true-referenced angle, normalized to `[0, 360)`.
    pub fn t(value: f32) -> Self {
        Self {
            value: normalize(value),
            unit: AngleUnit::TrueNorth,
        }
    }

    /// Creates a magnetic-referenced angle, normalized to `[0, 360)`.
    pub fn m(value: f32) -> Self {
        Self {
            value: normalize(value),
            unit: AngleUnit::MagneticNorth,
        }
    }

    /// Creates an angle from radians.
    pub fn rad(value: f32) -> Self {
        Self {
            value,
            unit: AngleUnit::Radians,
        }
    }

    /// The underlying degree value re-normalized to `[0, 360)`.
    ///
    /// [`UnitOfMeasure::to_si`]/[`UnitOfMeasure::from_si`] already normalize
    /// compass units on construction; this is a defensive re-normalization
    /// for angles produced by arithmetic (e.g. `a - b`) that may fall
    /// outside the range.
    pub fn normalized(&self) -> Self {
        match self.unit {
            AngleUnit::Radians => *self,
            _ => Self {
                value: normalize(self.value),
                unit: self.unit,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_on_construction() {
        assert_eq!(Angle::t(370.0).value(), &10.0);
        assert_eq!(Angle::t(-10.0).value(), &350.0);
        assert_eq!(Angle::t(0.0).value(), &0.0);
    }

    #[test]
    fn converts_degrees_to_radians() {
        let a = Angle::t(180.0);
        assert!((a.to_si() - std::f32::consts::PI).abs() < 1e-6);
    }
}
