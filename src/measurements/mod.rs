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

//! Strongly-typed units of measure.
//!
//! Every physical quantity crossing a public boundary (distance, speed,
//! angle, duration, fuel) is a [`Measurement<T, U>`] rather than a bare
//! `f32`, so a caller cannot accidentally add feet to nautical miles or
//! degrees to radians. Conversions always go through the unit's SI value.

pub mod angle;
pub mod constants;
pub mod duration;
pub mod fuel;
pub mod length;
pub mod speed;
pub mod temperature;

pub use angle::{Angle, AngleUnit};
pub use duration::{Duration, DurationUnit};
pub use fuel::{Fuel, FuelFlow, FuelType};
pub use length::{Length, LengthUnit};
pub use speed::{Speed, SpeedUnit};
pub use temperature::{Temperature, TemperatureUnit};

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Add, Div, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The physical dimension a unit belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PhysicalQuantity {
    Angle,
    Length,
    Speed,
    Duration,
    Temperature,
}

/// A unit that can convert a value of `T` to and from its SI counterpart.
pub trait UnitOfMeasure<T>: Copy {
    fn quantity() -> PhysicalQuantity;
    fn si() -> Self;
    fn symbol(&self) -> &'static str;
    fn from_si(value: T, to: &Self) -> T;
    fn to_si(&self, value: &T) -> T;
}

/// A value tagged with the unit it was expressed in.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement<T, U> {
    pub(crate) value: T,
    pub(crate) unit: U,
}

impl<U> Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    pub fn value(&self) -> &f32 {
        &self.value
    }

    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// The value expressed in the quantity's SI unit.
    pub fn to_si(&self) -> f32 {
        self.unit.to_si(&self.value)
    }

    /// Builds a measurement from an SI value, tagging it with `unit`.
    pub fn from_si(value: f32, unit: U) -> Self {
        Self {
            value: U::from_si(value, &unit),
            unit,
        }
    }

    /// Re-expresses this measurement in `to`.
    pub fn convert_to(&self, to: U) -> Self {
        Self::from_si(self.to_si(), to)
    }
}

impl<U> Add for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + rhs.convert_to(self.unit).value,
            unit: self.unit,
        }
    }
}

impl<U> Sub for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value - rhs.convert_to(self.unit).value,
            unit: self.unit,
        }
    }
}

impl<U> Mul<f32> for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            value: self.value * rhs,
            unit: self.unit,
        }
    }
}

impl<U> Div<f32> for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self {
            value: self.value / rhs,
            unit: self.unit,
        }
    }
}

impl<U> Display for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if let Some(precision) = f.precision() {
            write!(f, "{:.precision$} {}", self.value, self.unit.symbol())
        } else {
            write!(f, "{} {}", self.value, self.unit.symbol())
        }
    }
}
