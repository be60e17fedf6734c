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

//! Route string decoding (lex -> classify -> expand) and the navlog
//! calculator built over the expanded waypoint list.

pub mod calculator;
pub mod expander;
pub mod leg;
pub mod lexer;
pub mod navlog;
pub mod token;

pub use calculator::{CalculationResult, FuelPlan, RouteCalculator};
pub use expander::ExpansionResult;
pub use leg::Leg;
pub use navlog::{FuelStatus, Navlog};
pub use token::RouteToken;

use crate::nd::store::ReferenceDataStore;

/// Decodes a route string end-to-end: lex, classify against `rds`, then
/// run the expansion state machine. This is the composition spec.md §4.4
/// describes as the Route Expander's overall contract.
pub fn decode(route: &str, rds: &ReferenceDataStore) -> expander::ExpansionResult {
    let words = lexer::lex(route);
    let mut warnings = Vec::new();
    let tokens = token::classify(&words, rds, &mut warnings);
    let mut result = expander::expand(&tokens, rds);
    result.warnings.splice(0..0, warnings);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Coordinate;
    use crate::nd::airway::{Airway, AirwayLevel};
    use crate::nd::fix::Fix;
    use crate::nd::store::ReferenceDataStoreBuilder;

    #[test]
    fn decodes_airway_expansion_scenario() {
        let mut builder = ReferenceDataStoreBuilder::new();
        for (ident, lat, lon) in [
            ("GERBS", 41.0, -88.0),
            ("FIXO1", 41.2, -87.8),
            ("FIXO2", 41.4, -87.6),
            ("MIP", 41.6, -87.4),
        ] {
            builder.add_fix(Fix {
                ident: ident.into(),
                coordinate: Coordinate::new(lat, lon),
                is_reporting_point: false,
            });
        }
        builder.add_airway(Airway {
            ident: "J146".into(),
            level: AirwayLevel::High,
            fixes: vec!["GERBS", "FIXO1", "FIXO2", "MIP"]
                .into_iter()
                .map(String::from)
                .collect(),
        });
        let rds = builder.build();

        let result = decode("GERBS J146 MIP", &rds);
        assert!(result.errors.is_empty());
        let idents: Vec<String> = result.waypoints.iter().map(crate::nd::waypoint::Waypoint::ident).collect();
        assert_eq!(idents, vec!["GERBS", "FIXO1", "FIXO2", "MIP"]);
    }
}
