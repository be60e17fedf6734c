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

//! A single leg of a navlog: one `from -> to` hop, plus everything the
//! calculator derives for it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geom::geodesy;
use crate::nd::waypoint::Waypoint;

/// One hop of the navlog. Numeric fields that depend on winds or fuel
/// stay `None` until the calculator fills them in; per spec.md §3, if
/// winds are absent `trueHeading == trueCourse` and `groundSpeed == tas`
/// exactly, rather than merely approximately.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Leg {
    pub from: Waypoint,
    pub to: Waypoint,
    pub distance_nm: f64,
    pub true_course: f64,
    pub mag_var: f64,
    pub mag_course: f64,
    pub wind_dir: Option<f64>,
    pub wind_spd: Option<f64>,
    pub wind_temp: Option<f64>,
    pub true_heading: Option<f64>,
    pub mag_heading: Option<f64>,
    pub ground_speed: Option<f64>,
    pub leg_time_min: Option<f64>,
    pub cumulative_time_min: Option<f64>,
    pub fuel_burn_gal: Option<f64>,
    /// Set when this leg could not be resolved numerically (un-flyable
    /// headwind, zero-distance leg): a per-leg warning, not a fatal error.
    pub numeric_warning: Option<String>,
}

impl Leg {
    /// Builds a leg with geometry only (distance, true course, magnetic
    /// variation, magnetic course); everything wind/fuel/time-dependent
    /// starts unset.
    pub fn new(from: Waypoint, to: Waypoint, distance_nm: f64, true_course: f64, mag_var: f64) -> Self {
        Self {
            from,
            to,
            distance_nm,
            true_course,
            mag_var,
            mag_course: geodesy::normalize_deg(true_course - mag_var),
            wind_dir: None,
            wind_spd: None,
            wind_temp: None,
            true_heading: None,
            mag_heading: None,
            ground_speed: None,
            leg_time_min: None,
            cumulative_time_min: None,
            fuel_burn_gal: None,
            numeric_warning: None,
        }
    }

    /// Applies the windless case from spec.md §4.6 step 4: heading
    /// equals course, ground speed equals TAS, exactly.
    pub fn apply_no_wind(&mut self, tas_kt: f64) {
        self.true_heading = Some(self.true_course);
        self.mag_heading = Some(self.mag_course);
        self.ground_speed = Some(tas_kt);
    }

    /// Applies the wind triangle from spec.md §4.6 step 3. On an
    /// un-flyable headwind (`|windCrossComponent| >= tas`), records
    /// [`Error::Numeric`] in `numeric_warning` and leaves heading/ground
    /// speed `None` rather than propagating the error — per spec.md §7,
    /// this is a per-leg failure, not a fatal one.
    pub fn apply_wind(&mut self, wind_dir: f64, wind_spd: f64, wind_temp: Option<f64>, tas_kt: f64) {
        self.wind_dir = Some(wind_dir);
        self.wind_spd = Some(wind_spd);
        self.wind_temp = wind_temp;

        match wind_triangle(self.true_course, self.mag_var, wind_dir, wind_spd, tas_kt) {
            Ok(triangle) => {
                self.true_heading = Some(triangle.true_heading);
                self.mag_heading = Some(triangle.mag_heading);
                self.ground_speed = Some(triangle.ground_speed);
            }
            Err(Error::Numeric(detail)) => {
                self.numeric_warning = Some(detail);
            }
            Err(_) => unreachable!("wind_triangle only ever returns Error::Numeric"),
        }
    }

    /// `legTimeMin = 60 * distanceNm / groundSpeed`, per spec.md §4.6 step
    /// 5. `None` if ground speed could not be resolved, or if ground
    /// speed is non-positive (a zero-length leg between duplicate
    /// waypoints is its own `Numeric` case).
    pub fn compute_time(&mut self) {
        match self.ground_speed {
            Some(gs) if gs > 0.0 => {
                self.leg_time_min = Some(60.0 * self.distance_nm / gs);
            }
            Some(_) => {
                self.numeric_warning.get_or_insert_with(|| "non-positive ground speed".to_string());
            }
            None => {}
        }
    }

    /// `legFuelGal = burnRateGph * legTimeMin / 60`, per spec.md §4.6 step
    /// 6.
    pub fn compute_fuel(&mut self, burn_rate_gph: f64) {
        self.fuel_burn_gal = self.leg_time_min.map(|t| burn_rate_gph * t / 60.0);
    }
}

/// Result of solving the wind triangle for one leg.
pub struct WindTriangle {
    pub wca_deg: f64,
    pub true_heading: f64,
    pub mag_heading: f64,
    pub ground_speed: f64,
}

/// Solves the wind triangle per spec.md §4.6 step 3. Returns
/// `Err(Error::Numeric(..))` when `|windCrossComponent| >= tasKt` — the
/// leg is un-flyable at the given TAS.
pub fn wind_triangle(
    true_course: f64,
    mag_var: f64,
    wind_dir: f64,
    wind_spd: f64,
    tas_kt: f64,
) -> Result<WindTriangle, Error> {
    let alpha = (true_course - wind_dir).to_radians();
    let wind_cross = wind_spd * alpha.sin();
    let wind_head = wind_spd * alpha.cos();

    if wind_cross.abs() >= tas_kt {
        return Err(Error::Numeric(format!(
            "un-flyable leg: wind cross component {wind_cross:.1} kt >= TAS {tas_kt:.1} kt"
        )));
    }

    let wca = (wind_cross / tas_kt).asin();
    let true_heading = geodesy::normalize_deg(true_course + wca.to_degrees());
    let mag_heading = geodesy::normalize_deg(true_heading - mag_var);
    let ground_speed = tas_kt * wca.cos() - wind_head;

    Ok(WindTriangle {
        wca_deg: wca.to_degrees(),
        true_heading,
        mag_heading,
        ground_speed,
    })
}
