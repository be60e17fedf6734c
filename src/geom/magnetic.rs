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

//! Magnetic declination via the World Magnetic Model.
//!
//! Uses the WMM2020 coefficient set shipped by `world_magnetic_model` 0.2,
//! valid 2020.0-2025.0. Dates outside that window still produce a value —
//! the model extrapolates rather than refusing — callers flying flights
//! planned well past the model's epoch should expect slowly growing error
//! rather than a hard failure.

use chrono::{Datelike, NaiveDate};
use world_magnetic_model::uom::si::angle::degree;
use world_magnetic_model::uom::si::f32::{Angle as UomAngle, Length as UomLength};
use world_magnetic_model::uom::si::length::meter;
use world_magnetic_model::GeomagneticField;

use crate::geom::coordinate::Coordinate;

/// Magnetic declination (variation) at `coordinate` on `date`, in signed
/// degrees east of true north, as used throughout the calculator's
/// `magCourse`/`magHeading` formulas.
///
/// Returned as a plain `f32` rather than [`crate::measurements::Angle`]:
/// that type normalizes every compass-referenced value to `[0, 360)` on
/// construction, which would turn a westerly variation (e.g. -13° near
/// KLGA) into 347° and silently flip its sign for any caller that reads
/// the raw value instead of subtracting it.
pub fn declination(coordinate: &Coordinate, date: NaiveDate) -> f32 {
    let field = GeomagneticField::new(
        UomLength::new::<meter>(0.0),
        UomAngle::new::<degree>(coordinate.latitude as f32),
        UomAngle::new::<degree>(coordinate.longitude as f32),
        decimal_year(date),
    )
    .expect("coordinate should be within WGS84 bounds after RDS/expander validation");

    field.declination().get::<degree>()
}

fn decimal_year(date: NaiveDate) -> f32 {
    let year = date.year();
    let day_of_year = date.ordinal() as f32;
    let days_in_year = if is_leap_year(year) { 366.0 } else { 365.0 };
    year as f32 + (day_of_year - 1.0) / days_in_year
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
