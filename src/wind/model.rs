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

//! Wind-forecast data model: station index, altitude levels, and the
//! `useWindow`/`parsedAt` freshness envelope, per spec.md §3.

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One altitude level of a station forecast.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Level {
    pub altitude_ft: f64,
    pub dir_true: f64,
    pub speed_kt: f64,
    pub temp_c: Option<f64>,
}

/// A single station's forecast: location plus its altitude levels,
/// ordered or not — [`crate::wind::interpolate`] sorts on demand.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StationForecast {
    pub station_id: String,
    pub lat: f64,
    pub lon: f64,
    pub levels: Vec<Level>,
}

/// The UTC window a forecast is valid for.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UseWindow {
    pub from_utc: DateTime<Utc>,
    pub to_utc: DateTime<Utc>,
}

impl UseWindow {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.from_utc <= instant && instant <= self.to_utc
    }
}

/// A full wind-aloft forecast: every station, its validity window, and
/// when it was parsed (for the freshness check in
/// [`crate::route::calculator`]).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindForecast {
    pub stations: Vec<StationForecast>,
    pub use_window: UseWindow,
    pub parsed_at: DateTime<Utc>,
}
