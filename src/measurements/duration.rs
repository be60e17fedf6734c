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

/// Duration unit with _s_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DurationUnit {
    Seconds,
    Minutes,
    Hours,
}

impl UnitOfMeasure<f32> for DurationUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Duration
    }

    fn si() -> Self {
        Self::Seconds
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Minutes => "min",
            Self::Hours => "h",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        match to {
            Self::Seconds => value,
            Self::Minutes => value / 60.0,
            Self::Hours => value / 3_600.0,
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        match self {
            Self::Seconds => *value,
            Self::Minutes => value * 60.0,
            Self::Hours => value * 3_600.0,
        }
    }
}

/// A duration, e.g. a leg time or cumulative time.
pub type Duration = Measurement<f32, DurationUnit>;

impl Duration {
    pub fn s(value: f32) -> Self {
        Self {
            value,
            unit: DurationUnit::Seconds,
        }
    }

    pub fn min(value: f32) -> Self {
        Self {
            value,
            unit: DurationUnit::Minutes,
        }
    }

    pub fn h(value: f32) -> Self {
        Self {
            value,
            unit: DurationUnit::Hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_to_minutes() {
        let d = Duration::h(2.0).convert_to(DurationUnit::Minutes);
        assert_eq!(d.value(), &120.0);
    }
}
