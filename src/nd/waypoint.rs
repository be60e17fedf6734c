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

use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::Coordinate;
use crate::nd::airport::Airport;
use crate::nd::fix::Fix;
use crate::nd::navaid::Navaid;

/// A point the route expander and calculator can resolve a token to.
///
/// `Airport`/`Navaid`/`Fix` hold an `Rc` into the reference data store so
/// legs and tokens can share the same underlying record rather than
/// cloning it; `Coordinate` is synthesized directly from a parsed literal
/// and owns no RDS entry.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Waypoint {
    Airport(Rc<Airport>),
    Navaid(Rc<Navaid>),
    Fix(Rc<Fix>),
    Coordinate(Coordinate),
}

impl Waypoint {
    /// The identifier used in a route string, or the literal coordinate
    /// text for a bare `Coordinate` waypoint.
    pub fn ident(&self) -> String {
        match self {
            Self::Airport(a) => a.ident().to_string(),
            Self::Navaid(n) => n.ident().to_string(),
            Self::Fix(f) => f.ident().to_string(),
            Self::Coordinate(c) => format!("{c}"),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        match self {
            Self::Airport(a) => a.coordinate(),
            Self::Navaid(n) => n.coordinate(),
            Self::Fix(f) => f.coordinate(),
            Self::Coordinate(c) => *c,
        }
    }
}

impl PartialEq<str> for Waypoint {
    fn eq(&self, other: &str) -> bool {
        self.ident() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_waypoint_has_no_named_ident_but_displays() {
        let wp = Waypoint::Coordinate(Coordinate::new(48.2333, -68.8));
        assert!(wp.ident().contains("48.2333"));
    }

    #[test]
    fn airport_waypoint_ident_matches_icao() {
        let airport = Rc::new(Airport {
            icao: "KORD".into(),
            iata: None,
            name: "O'Hare".into(),
            coordinate: Coordinate::new(41.9786, -87.9048),
            elevation_ft: 672,
            airspace_class: None,
            runways: Vec::new(),
            frequencies: Vec::new(),
        });
        let wp = Waypoint::Airport(airport);
        assert_eq!(wp.ident(), "KORD");
    }
}
