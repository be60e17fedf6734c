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

//! The expansion state machine: a resolved [`RouteToken`] stream in,
//! an explicit [`Waypoint`] sequence out.
//!
//! Airways and procedures only carry member *identifiers*; this module
//! is where those identifiers are resolved back against the reference
//! data store into concrete waypoints.

use log::{trace, warn};

use crate::geom::Coordinate;
use crate::nd::store::ReferenceDataStore;
use crate::nd::waypoint::Waypoint;
use crate::route::token::RouteToken;

/// Result of expanding a route string: whatever was resolved, plus any
/// non-fatal warnings and the first fatal error encountered (if any).
#[derive(Clone, Debug, Default)]
pub struct ExpansionResult {
    pub waypoints: Vec<Waypoint>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// Walks `tokens` left-to-right, expanding airways and procedures inline
/// and resolving every reference against `rds`.
pub fn expand(tokens: &[RouteToken], rds: &ReferenceDataStore) -> ExpansionResult {
    let mut result = ExpansionResult::default();

    let mut i = 0;
    while i < tokens.len() {
        trace!("expand: token {i}/{}", tokens.len());
        match &tokens[i] {
            RouteToken::Unknown(raw) => {
                result.errors.push(format!("unknown token at position {i}: {raw}"));
                return result;
            }
            RouteToken::DirectMarker => {
                // Marks "next hop is direct". Since airway lookahead is
                // resolved inline below, there is no cross-iteration
                // pending state for DCT to clear.
            }
            RouteToken::CoordinateLit(lat, lon) => {
                result.waypoints.push(Waypoint::Coordinate(Coordinate::new(*lat, *lon)));
            }
            RouteToken::AirportRef(a) => result.waypoints.push(Waypoint::Airport(a.clone())),
            RouteToken::NavaidRef(n) => result.waypoints.push(Waypoint::Navaid(n.clone())),
            RouteToken::FixRef(f) => result.waypoints.push(Waypoint::Fix(f.clone())),
            RouteToken::AirwayRef(airway) => {
                let entry_ident = result.waypoints.last().map(Waypoint::ident);
                let exit_ident = tokens.get(i + 1).and_then(token_ident);

                match (entry_ident, exit_ident) {
                    (Some(entry), Some(exit)) => {
                        if airway.position_of(&entry).is_none() {
                            result.errors.push(format!(
                                "airway {} does not contain fix {entry}",
                                airway.ident
                            ));
                            return result;
                        }
                        if airway.position_of(&exit).is_none() {
                            result.errors.push(format!(
                                "airway {} does not contain fix {exit}",
                                airway.ident
                            ));
                            return result;
                        }
                        // membership was just confirmed for both ends
                        let between = airway.between(&entry, &exit).unwrap_or_default();
                        if between.is_empty() && entry == exit {
                            result.warnings.push(format!(
                                "airway {}: entry and exit fix are both {entry}; nothing to expand",
                                airway.ident
                            ));
                        }
                        for ident in between {
                            match rds.find_waypoint(&ident) {
                                Some(wp) => result.waypoints.push(wp),
                                None => {
                                    result.errors.push(format!(
                                        "reference data missing for airway member {ident}"
                                    ));
                                    return result;
                                }
                            }
                        }
                    }
                    _ => {
                        result.errors.push(format!(
                            "airway {} requires both a preceding and following fix",
                            airway.ident
                        ));
                        return result;
                    }
                }
            }
            RouteToken::ProcedureRef { procedure, transition } => {
                let fixes = match transition {
                    Some(name) => match procedure.transition(name) {
                        Some(t) => procedure.expand_with_transition(t),
                        None => {
                            result.warnings.push(format!(
                                "procedure {} has no transition named {name}",
                                procedure.ident
                            ));
                            i += 1;
                            continue;
                        }
                    },
                    None => procedure.expand_body(),
                };

                let mut fixes = fixes.into_iter();
                if let (Some(first), Some(prev)) = (fixes.clone().next(), result.waypoints.last()) {
                    if prev.ident() == first {
                        fixes.next();
                    }
                }

                for ident in fixes {
                    match rds.find_waypoint(&ident) {
                        Some(wp) => result.waypoints.push(wp),
                        None => {
                            result
                                .errors
                                .push(format!("reference data missing for procedure fix {ident}"));
                            return result;
                        }
                    }
                }
            }
        }
        i += 1;
    }

    if result.waypoints.is_empty() && result.errors.is_empty() {
        warn!("expand: route resolved to zero waypoints");
    }

    result
}

fn token_ident(token: &RouteToken) -> Option<String> {
    match token {
        RouteToken::AirportRef(a) => Some(a.ident().to_string()),
        RouteToken::NavaidRef(n) => Some(n.ident().to_string()),
        RouteToken::FixRef(f) => Some(f.ident().to_string()),
        RouteToken::CoordinateLit(lat, lon) => {
            Some(Waypoint::Coordinate(Coordinate::new(*lat, *lon)).ident())
        }
        RouteToken::AirwayRef(_)
        | RouteToken::ProcedureRef { .. }
        | RouteToken::DirectMarker
        | RouteToken::Unknown(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd::airway::{Airway, AirwayLevel};
    use crate::nd::fix::Fix;
    use crate::nd::procedure::{Procedure, ProcedureKind, Transition};
    use crate::nd::store::ReferenceDataStoreBuilder;
    use std::rc::Rc;

    fn fix(ident: &str, lat: f64, lon: f64) -> Fix {
        Fix {
            ident: ident.into(),
            coordinate: Coordinate::new(lat, lon),
            is_reporting_point: false,
        }
    }

    fn rds_with_j146() -> ReferenceDataStore {
        let mut builder = ReferenceDataStoreBuilder::new();
        for (ident, lat, lon) in [
            ("GERBS", 41.0, -88.0),
            ("FIXO1", 41.2, -87.8),
            ("FIXO2", 41.4, -87.6),
            ("MIP", 41.6, -87.4),
        ] {
            builder.add_fix(fix(ident, lat, lon));
        }
        builder.add_airway(Airway {
            ident: "J146".into(),
            level: AirwayLevel::High,
            fixes: vec!["GERBS", "FIXO1", "FIXO2", "MIP"]
                .into_iter()
                .map(String::from)
                .collect(),
        });
        builder.build()
    }

    #[test]
    fn expands_airway_between_two_fixes() {
        let rds = rds_with_j146();
        let gerbs = match rds.find_waypoint("GERBS").unwrap() {
            Waypoint::Fix(f) => f,
            _ => unreachable!(),
        };
        let mip = match rds.find_waypoint("MIP").unwrap() {
            Waypoint::Fix(f) => f,
            _ => unreachable!(),
        };
        let airway = rds.find_airway("J146").unwrap();

        let tokens = vec![
            RouteToken::FixRef(gerbs),
            RouteToken::AirwayRef(airway),
            RouteToken::FixRef(mip),
        ];
        let result = expand(&tokens, &rds);
        assert!(result.errors.is_empty());
        let idents: Vec<String> = result.waypoints.iter().map(Waypoint::ident).collect();
        assert_eq!(idents, vec!["GERBS", "FIXO1", "FIXO2", "MIP"]);
    }

    #[test]
    fn unknown_token_halts_and_returns_partial() {
        let rds = rds_with_j146();
        let gerbs = match rds.find_waypoint("GERBS").unwrap() {
            Waypoint::Fix(f) => f,
            _ => unreachable!(),
        };
        let tokens = vec![RouteToken::FixRef(gerbs), RouteToken::Unknown("ZZZZZ".into())];
        let result = expand(&tokens, &rds);
        assert_eq!(result.waypoints.len(), 1);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn procedure_with_transition_dedupes_junction() {
        let mut builder = ReferenceDataStoreBuilder::new();
        for (ident, lat, lon) in [
            ("KAYYS", 42.0, -73.0),
            ("WYNDE", 41.9, -73.2),
            ("BAAKE", 41.8, -73.5),
        ] {
            builder.add_fix(fix(ident, lat, lon));
        }
        builder.add_airport(crate::nd::airport::Airport {
            icao: "KORD".into(),
            iata: None,
            name: "O'Hare".into(),
            coordinate: Coordinate::new(41.9786, -87.9048),
            elevation_ft: 672,
            airspace_class: None,
            runways: Vec::new(),
            frequencies: Vec::new(),
        });
        builder.add_airport(crate::nd::airport::Airport {
            icao: "KLGA".into(),
            iata: None,
            name: "LaGuardia".into(),
            coordinate: Coordinate::new(40.7769, -73.8740),
            elevation_ft: 21,
            airspace_class: None,
            runways: Vec::new(),
            frequencies: Vec::new(),
        });
        builder.add_procedure(Procedure {
            ident: "WYNDE3".into(),
            kind: ProcedureKind::Star,
            airport_icao: "KLGA".into(),
            body: vec!["WYNDE", "BAAKE", "KLGA"].into_iter().map(String::from).collect(),
            transitions: vec![Transition {
                name: "KAYYS".into(),
                fixes: vec!["KAYYS".into(), "WYNDE".into()],
            }],
        });
        let rds = builder.build();

        let kord = match rds.find_waypoint("KORD").unwrap() {
            Waypoint::Airport(a) => a,
            _ => unreachable!(),
        };
        let klga = match rds.find_waypoint("KLGA").unwrap() {
            Waypoint::Airport(a) => a,
            _ => unreachable!(),
        };
        let procedure = rds.find_procedure("WYNDE3").unwrap();

        let tokens = vec![
            RouteToken::AirportRef(kord),
            RouteToken::ProcedureRef {
                procedure,
                transition: Some("KAYYS".into()),
            },
            RouteToken::AirportRef(klga),
        ];
        let result = expand(&tokens, &rds);
        assert!(result.errors.is_empty());
        let idents: Vec<String> = result.waypoints.iter().map(Waypoint::ident).collect();
        assert_eq!(idents, vec!["KORD", "KAYYS", "WYNDE", "BAAKE", "KLGA"]);
    }

    #[test]
    fn airway_same_endpoint_warns_instead_of_erroring() {
        let rds = rds_with_j146();
        let gerbs = match rds.find_waypoint("GERBS").unwrap() {
            Waypoint::Fix(f) => f,
            _ => unreachable!(),
        };
        let airway = rds.find_airway("J146").unwrap();
        let tokens = vec![
            RouteToken::FixRef(gerbs.clone()),
            RouteToken::AirwayRef(airway),
            RouteToken::FixRef(gerbs),
        ];
        let result = expand(&tokens, &rds);
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 1);
    }
}
