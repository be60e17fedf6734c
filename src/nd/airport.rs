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

use crate::geom::Coordinate;

/// Airspace classification tagged onto an airport, per ICAO Annex 11.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirspaceClass {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Runway {
    pub designator: String,
    pub heading_true: Option<f32>,
    pub length_ft: Option<u32>,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frequency {
    /// e.g. "TWR", "ATIS", "GND".
    pub use_name: String,
    pub mhz: f32,
}

/// An airport or aerodrome, per the spec's `Waypoint::Airport` variant.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airport {
    /// Four-letter ICAO identifier, no digits.
    pub icao: String,
    pub iata: Option<String>,
    pub name: String,
    pub coordinate: Coordinate,
    /// Elevation above MSL, feet.
    pub elevation_ft: i32,
    pub airspace_class: Option<AirspaceClass>,
    pub runways: Vec<Runway>,
    pub frequencies: Vec<Frequency>,
}

impl Airport {
    pub fn ident(&self) -> &str {
        &self.icao
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// `true` if `icao` is exactly four letters with no digits, per the
    /// data model invariant in spec.md §3.
    pub fn has_valid_icao(&self) -> bool {
        self.icao.len() == 4 && self.icao.chars().all(|c| c.is_ascii_alphabetic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Airport {
        Airport {
            icao: "KORD".into(),
            iata: Some("ORD".into()),
            name: "Chicago O'Hare Intl".into(),
            coordinate: Coordinate::new(41.9786, -87.9048),
            elevation_ft: 672,
            airspace_class: Some(AirspaceClass::B),
            runways: Vec::new(),
            frequencies: Vec::new(),
        }
    }

    #[test]
    fn valid_icao() {
        assert!(sample().has_valid_icao());
    }

    #[test]
    fn rejects_icao_with_digit() {
        let mut a = sample();
        a.icao = "K0RD".into();
        assert!(!a.has_valid_icao());
    }
}
