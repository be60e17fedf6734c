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

//! Offline VFR flight-plan computation core.
//!
//! This crate holds no GUI, no storage, and no network fetches; it takes
//! parsed reference data and a pilot's route string and produces a fully
//! resolved navigation log. Three layers, leaves first:
//!
//! - [`nd`] — the reference data store, token classifier, and spatial
//!   query engine over airports, navaids, fixes, airways, and procedures.
//! - [`geom`] — spherical-Earth geodesy and magnetic declination.
//! - [`wind`] — winds-aloft forecast model and interpolation.
//! - [`route`] — route string decoding (lex, classify, expand) and the
//!   navlog calculator.
//!
//! Everything here is synchronous and single-threaded; the reference
//! data store is built once and read-only afterward.

pub mod error;
pub mod fc;
pub mod geom;
pub mod macros;
pub mod measurements;
pub mod nd;
pub mod route;
pub mod wind;

pub use error::{Error, Result};

/// Re-exports of the types most callers need, for `use navlog::prelude::*`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geom::Coordinate;
    pub use crate::nd::{
        Airport, Airway, Fix, Navaid, Procedure, ReferenceDataStore, ReferenceDataStoreBuilder,
        TokenClassifier, TokenType, Waypoint,
    };
    pub use crate::route::{
        CalculationResult, ExpansionResult, FuelPlan, Leg, Navlog, RouteCalculator, RouteToken,
    };
    pub use crate::wind::{StationForecast, UseWindow, WindForecast, WindSample};
}
