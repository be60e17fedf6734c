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

use std::fmt;

/// Error taxonomy for the flight-plan computation core.
///
/// Most of these never escape as an `Err`: the expander and calculator
/// collect per-token and per-leg failures into their own `warnings`/`errors`
/// string vectors and keep going. Only [`Error::DataMissing`] and
/// [`Error::InputSyntax`] are meant to propagate through `?` as a hard
/// failure of the whole call.
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// Malformed token, invalid coordinate literal, or an empty route
    /// string.
    InputSyntax(String),
    /// The token classifier returned `UNKNOWN` for an identifier.
    UnknownToken(String),
    /// An airway was referenced without both a preceding and following
    /// member fix, or an endpoint is not on the airway.
    AirwayContext { airway: String, detail: String },
    /// A named transition is not in the procedure's transition list.
    ProcedureContext { procedure: String, transition: String },
    /// RDS lookup returned nothing for an identifier that was classified as
    /// known. Indicates RDS/classifier disagreement.
    DataMissing(String),
    /// An un-flyable headwind (`|cross| >= TAS`) or a zero-distance leg.
    Numeric(String),
    /// The winds-aloft forecast is outside its `useWindow` or past its
    /// freshness bound.
    StaleWinds(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputSyntax(s) => write!(f, "invalid input: {s}"),
            Self::UnknownToken(ident) => write!(f, "unknown token: {ident}"),
            Self::AirwayContext { airway, detail } => {
                write!(f, "airway {airway}: {detail}")
            }
            Self::ProcedureContext {
                procedure,
                transition,
            } => write!(
                f,
                "procedure {procedure} has no transition named {transition}"
            ),
            Self::DataMissing(ident) => {
                write!(f, "reference data missing for {ident}")
            }
            Self::Numeric(s) => write!(f, "{s}"),
            Self::StaleWinds(s) => write!(f, "stale winds: {s}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
