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

//! Winds-aloft forecast model and interpolation.

pub mod interpolate;
pub mod model;

pub use interpolate::{interpolate, WindSample};
pub use model::{Level, StationForecast, UseWindow, WindForecast};

/// Hard outer freshness bound, regardless of `useWindow`: a forecast
/// older than this is always stale, per spec.md §9's resolved policy.
pub const FRESHNESS_BOUND_HOURS: i64 = 12;

/// Inner freshness bound that applies only while the flight's departure
/// time falls within the forecast's `useWindow`.
pub const EARLY_FRESHNESS_BOUND_HOURS: i64 = 6;
