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

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{constants, Duration, Measurement, PhysicalQuantity, UnitOfMeasure};

/// Fuel volume unit with _m³_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FuelType {
    UsGallons,
    CubicMeters,
}

impl UnitOfMeasure<f32> for FuelType {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Length // fuel has no dedicated quantity; reuses the SI-conversion machinery only
    }

    fn si() -> Self {
        Self::CubicMeters
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::UsGallons => "gal",
            Self::CubicMeters => "m³",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        match to {
            Self::CubicMeters => value,
            Self::UsGallons => value / constants::US_GALLON_IN_QUBIC_METER,
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        match self {
            Self::CubicMeters => *value,
            Self::UsGallons => value * constants::US_GALLON_IN_QUBIC_METER,
        }
    }
}

/// A quantity of fuel, per the spec's unit convention of US gallons.
pub type Fuel = Measurement<f32, FuelType>;

impl Fuel {
    pub fn gal(value: f32) -> Self {
        Self {
            value,
            unit: FuelType::UsGallons,
        }
    }
}

impl Add for Fuel {
    type Output = Fuel;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + rhs.convert_to(self.unit).value,
            unit: self.unit,
        }
    }
}

impl Sub for Fuel {
    type Output = Fuel;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value - rhs.convert_to(self.unit).value,
            unit: self.unit,
        }
    }
}

impl Display for Fuel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if let Some(precision) = f.precision() {
            write!(f, "{:.precision$} {}", self.value, self.unit.symbol())
        } else {
            write!(f, "{} {}", self.value, self.unit.symbol())
        }
    }
}

/// A fuel burn rate, gallons per hour.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuelFlow {
    gph: f32,
}

impl FuelFlow {
    pub fn gph(gph: f32) -> Self {
        Self { gph }
    }

    pub fn value(&self) -> f32 {
        self.gph
    }

    /// Fuel burned over `duration` at this flow rate.
    pub fn burned_over(&self, duration: Duration) -> Fuel {
        let hours = duration.convert_to(super::DurationUnit::Hours);
        Fuel::gal(self.gph * hours.value())
    }

    /// Endurance: how long `remaining` fuel lasts at this flow rate.
    pub fn endurance(&self, remaining: Fuel) -> Duration {
        Duration::h(remaining.convert_to(FuelType::UsGallons).value() / self.gph)
    }
}
