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

use super::{constants, Measurement, PhysicalQuantity, UnitOfMeasure};

/// Temperature unit with _K_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
}

impl UnitOfMeasure<f32> for TemperatureUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Temperature
    }

    fn si() -> Self {
        Self::Kelvin
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Kelvin => "K",
            Self::Celsius => "°C",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        match to {
            Self::Kelvin => value,
            Self::Celsius => value - constants::KELVIN_IN_CELSIUS,
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        match self {
            Self::Kelvin => *value,
            Self::Celsius => value + constants::KELVIN_IN_CELSIUS,
        }
    }
}

/// An air temperature, e.g. from a winds-aloft forecast level.
pub type Temperature = Measurement<f32, TemperatureUnit>;

impl Temperature {
    pub fn k(value: f32) -> Self {
        Self {
            value,
            unit: TemperatureUnit::Kelvin,
        }
    }

    pub fn c(value: f32) -> Self {
        Self {
            value,
            unit: TemperatureUnit::Celsius,
        }
    }
}
