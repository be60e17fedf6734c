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

//! The route calculator: turns an expanded waypoint list plus cruise
//! parameters into a [`Navlog`], per spec.md §4.6.

use chrono::{DateTime, Utc};
use log::{trace, warn};

use crate::error::Error;
use crate::geom::{geodesy, magnetic};
use crate::nd::waypoint::Waypoint;
use crate::route::leg::Leg;
use crate::route::navlog::{FuelStatus, Navlog};
use crate::wind::{self, WindForecast};

/// Fixed fuel-planning inputs: usable fuel aboard, taxi burn set aside
/// before engine start, and cruise burn rate.
#[derive(Clone, Copy, Debug)]
pub struct FuelPlan {
    pub usable_gal: f64,
    pub taxi_gal: f64,
    pub burn_rate_gph: f64,
}

/// Builder for a single route calculation, grounded on the same
/// `Option<T>` + chained-setter + `.build()`/`.calculate()` idiom used
/// throughout this crate's construction code.
#[derive(Default)]
pub struct RouteCalculator {
    waypoints: Vec<Waypoint>,
    tas_kt: Option<f64>,
    altitude_ft: Option<f64>,
    departure_utc: Option<DateTime<Utc>>,
    winds: Option<WindForecast>,
    fuel: Option<FuelPlan>,
}

/// The result of a calculation: the navlog plus any call-level warnings
/// (currently just staleness) that aren't specific to one leg.
#[derive(Clone, Debug)]
pub struct CalculationResult {
    pub navlog: Navlog,
    pub warnings: Vec<String>,
}

impl RouteCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waypoints(mut self, waypoints: Vec<Waypoint>) -> Self {
        self.waypoints = waypoints;
        self
    }

    pub fn tas_kt(mut self, tas_kt: f64) -> Self {
        self.tas_kt = Some(tas_kt);
        self
    }

    pub fn altitude_ft(mut self, altitude_ft: f64) -> Self {
        self.altitude_ft = Some(altitude_ft);
        self
    }

    pub fn departure_utc(mut self, departure_utc: DateTime<Utc>) -> Self {
        self.departure_utc = Some(departure_utc);
        self
    }

    pub fn winds(mut self, winds: WindForecast) -> Self {
        self.winds = Some(winds);
        self
    }

    pub fn fuel(mut self, fuel: FuelPlan) -> Self {
        self.fuel = Some(fuel);
        self
    }

    /// Runs the per-leg algorithm of spec.md §4.6 over the builder's
    /// waypoints. Fatal only when there are fewer than two waypoints
    /// (nothing to form a leg from) — everything else is a per-leg
    /// warning recorded on the leg itself plus, for stale winds, in the
    /// result's call-level `warnings`.
    pub fn calculate(self) -> Result<CalculationResult, Error> {
        if self.waypoints.len() < 2 {
            return Err(Error::InputSyntax(
                "at least two waypoints are required to form a leg".to_string(),
            ));
        }
        let tas_kt = self.tas_kt.unwrap_or(0.0);
        let departure_utc = self.departure_utc.unwrap_or_else(Utc::now);
        let flight_date = departure_utc.date_naive();

        let mut warnings = Vec::new();
        if let Some(forecast) = &self.winds {
            if let Some(detail) = staleness(&forecast.use_window, forecast.parsed_at, departure_utc) {
                warnings.push(detail);
            }
        }

        let mut legs = Vec::with_capacity(self.waypoints.len() - 1);
        let mut cumulative_time_min = 0.0;
        let mut used_gal = 0.0;

        for pair in self.waypoints.windows(2) {
            let from = pair[0].coordinate();
            let to = pair[1].coordinate();
            let distance_nm = geodesy::distance_nm(&from, &to);
            let true_course = geodesy::bearing_true(&from, &to);
            let midpoint = geodesy::destination(&from, true_course, distance_nm / 2.0);
            let mag_var = magnetic::declination(&midpoint, flight_date) as f64;

            let mut leg = Leg::new(pair[0].clone(), pair[1].clone(), distance_nm, true_course, mag_var);

            if distance_nm < 1e-9 {
                leg.numeric_warning = Some("zero-distance leg between duplicate waypoints".to_string());
                legs.push(leg);
                continue;
            }

            match &self.winds {
                Some(forecast) => {
                    match wind::interpolate(&forecast.stations, midpoint.latitude, midpoint.longitude, self.altitude_ft.unwrap_or(0.0)) {
                        Some(sample) => leg.apply_wind(sample.dir_true, sample.speed_kt, sample.temp_c, tas_kt),
                        None => leg.apply_no_wind(tas_kt),
                    }
                }
                None => leg.apply_no_wind(tas_kt),
            }

            leg.compute_time();
            if let Some(time) = leg.leg_time_min {
                cumulative_time_min += time;
                leg.cumulative_time_min = Some(cumulative_time_min);
            }

            if let Some(fuel) = &self.fuel {
                leg.compute_fuel(fuel.burn_rate_gph);
                if let Some(burn) = leg.fuel_burn_gal {
                    used_gal += burn;
                }
            }

            if let Some(warning) = &leg.numeric_warning {
                trace!("leg {} -> {}: {}", pair[0].ident(), pair[1].ident(), warning);
            }

            legs.push(leg);
        }

        let mut navlog = Navlog::new(self.waypoints, legs);
        if let Some(fuel) = &self.fuel {
            navlog = navlog.with_fuel_status(FuelStatus {
                usable_gal: fuel.usable_gal,
                taxi_gal: fuel.taxi_gal,
                used_gal,
                remaining_gal: fuel.usable_gal - fuel.taxi_gal - used_gal,
                endurance_hr: if fuel.burn_rate_gph > 0.0 {
                    (fuel.usable_gal - fuel.taxi_gal - used_gal) / fuel.burn_rate_gph
                } else {
                    0.0
                },
            });
        }

        Ok(CalculationResult { navlog, warnings })
    }
}

/// Per spec.md §9's resolved policy: a forecast is stale if the
/// departure time falls outside its `useWindow` at all, or if its age
/// exceeds 6 hours while the departure is in the first half of that
/// window, or 12 hours (the hard outer bound) otherwise.
fn staleness(use_window: &wind::UseWindow, parsed_at: DateTime<Utc>, departure_utc: DateTime<Utc>) -> Option<String> {
    if !use_window.contains(departure_utc) {
        warn!("winds forecast useWindow does not contain departure time {departure_utc}");
        return Some(format!(
            "departure time {departure_utc} is outside the forecast's useWindow"
        ));
    }

    let age_hours = (departure_utc - parsed_at).num_minutes() as f64 / 60.0;
    let midpoint = use_window.from_utc + (use_window.to_utc - use_window.from_utc) / 2;
    let bound_hours = if departure_utc <= midpoint {
        wind::EARLY_FRESHNESS_BOUND_HOURS
    } else {
        wind::FRESHNESS_BOUND_HOURS
    };

    if age_hours > bound_hours as f64 {
        warn!("winds forecast is {age_hours:.1}h old, exceeding the {bound_hours}h freshness bound");
        Some(format!(
            "forecast is {age_hours:.1}h old, exceeding the {bound_hours}h freshness bound"
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Coordinate;
    use chrono::TimeZone;

    fn kord() -> Waypoint {
        Waypoint::Coordinate(Coordinate::new(41.9786, -87.9048))
    }

    fn klga() -> Waypoint {
        Waypoint::Coordinate(Coordinate::new(40.7769, -73.8740))
    }

    #[test]
    fn direct_route_no_winds_matches_spec_scenario_one() {
        let result = RouteCalculator::new()
            .waypoints(vec![kord(), klga()])
            .tas_kt(140.0)
            .altitude_ft(7000.0)
            .departure_utc(Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap())
            .calculate()
            .unwrap();

        assert_eq!(result.navlog.legs.len(), 1);
        let leg = &result.navlog.legs[0];
        assert!((leg.distance_nm - 639.6).abs() < 2.0);
        assert!((leg.true_course - 96.0).abs() < 2.0);
        assert_eq!(leg.mag_heading, Some(leg.mag_course));
        assert_eq!(leg.ground_speed, Some(140.0));
        assert!((leg.leg_time_min.unwrap() - 274.0).abs() < 3.0);
    }

    #[test]
    fn unflyable_leg_is_numeric_warning_not_fatal() {
        let forecast = WindForecast {
            stations: vec![crate::wind::StationForecast {
                station_id: "TEST".into(),
                lat: 41.0,
                lon: -80.0,
                levels: vec![crate::wind::Level {
                    altitude_ft: 5000.0,
                    dir_true: 180.0,
                    speed_kt: 60.0,
                    temp_c: Some(10.0),
                }],
            }],
            use_window: wind::UseWindow {
                from_utc: Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap(),
                to_utc: Utc.with_ymd_and_hms(2026, 6, 2, 0, 0, 0).unwrap(),
            },
            parsed_at: Utc.with_ymd_and_hms(2026, 6, 1, 11, 0, 0).unwrap(),
        };

        let result = RouteCalculator::new()
            .waypoints(vec![
                Waypoint::Coordinate(Coordinate::new(41.0, -80.0)),
                Waypoint::Coordinate(Coordinate::new(41.0, -79.3)),
            ])
            .tas_kt(40.0)
            .altitude_ft(5000.0)
            .departure_utc(Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap())
            .winds(forecast)
            .calculate()
            .unwrap();

        let leg = &result.navlog.legs[0];
        assert!(leg.numeric_warning.is_some());
        assert!(leg.ground_speed.is_none());
        assert!(leg.mag_heading.is_none());
    }

    #[test]
    fn departure_outside_use_window_is_stale() {
        let forecast = WindForecast {
            stations: vec![],
            use_window: wind::UseWindow {
                from_utc: Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap(),
                to_utc: Utc.with_ymd_and_hms(2026, 6, 1, 6, 0, 0).unwrap(),
            },
            parsed_at: Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap(),
        };
        let result = RouteCalculator::new()
            .waypoints(vec![kord(), klga()])
            .tas_kt(140.0)
            .departure_utc(Utc.with_ymd_and_hms(2026, 6, 2, 0, 0, 0).unwrap())
            .winds(forecast)
            .calculate()
            .unwrap();
        assert_eq!(result.warnings.len(), 1);
    }
}
