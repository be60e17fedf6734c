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

//! The fully-resolved navigation log: waypoints, legs, and totals.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::nd::waypoint::Waypoint;
use crate::route::leg::Leg;

/// Fuel status accumulated across a navlog, per spec.md §4.6 step 6.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuelStatus {
    pub usable_gal: f64,
    pub taxi_gal: f64,
    pub used_gal: f64,
    pub remaining_gal: f64,
    pub endurance_hr: f64,
}

/// `{ waypoints, legs, totalDistanceNm, totalTimeMin, fuelStatus? }`, per
/// spec.md §3. `legs.len() == waypoints.len() - 1` and
/// `legs[i].from == waypoints[i] && legs[i].to == waypoints[i + 1]`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Navlog {
    pub waypoints: Vec<Waypoint>,
    pub legs: Vec<Leg>,
    pub total_distance_nm: f64,
    pub total_time_min: f64,
    pub fuel_status: Option<FuelStatus>,
}

impl Navlog {
    /// Builds a navlog from a resolved waypoint list and its legs,
    /// deriving totals by summation. Cumulative time per leg is expected
    /// to already be set on each `Leg` by the calculator that built it.
    pub fn new(waypoints: Vec<Waypoint>, legs: Vec<Leg>) -> Self {
        let total_distance_nm = legs.iter().map(|l| l.distance_nm).sum();
        let total_time_min = legs.iter().filter_map(|l| l.leg_time_min).sum();
        Self {
            waypoints,
            legs,
            total_distance_nm,
            total_time_min,
            fuel_status: None,
        }
    }

    pub fn with_fuel_status(mut self, status: FuelStatus) -> Self {
        self.fuel_status = Some(status);
        self
    }

    /// ETA at waypoint index `i` (0 = departure), given a UTC departure
    /// time.
    pub fn eta_at(&self, departure_utc: chrono::DateTime<chrono::Utc>, index: usize) -> Option<chrono::DateTime<chrono::Utc>> {
        if index == 0 {
            return Some(departure_utc);
        }
        let cumulative = self.legs.get(index - 1)?.cumulative_time_min?;
        Some(departure_utc + chrono::Duration::seconds((cumulative * 60.0).round() as i64))
    }

    /// Serializes this navlog to its bit-exact JSON export form, per
    /// spec.md §6.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::error::Result<String> {
        serde_json::to_string(self).map_err(|e| crate::error::Error::InputSyntax(e.to_string()))
    }

    /// Parses a navlog back from its JSON export form.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::error::Error::InputSyntax(e.to_string()))
    }
}
