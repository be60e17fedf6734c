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

//! Context-aware classification of lexed [`Word`]s into [`RouteToken`]s.

use std::rc::Rc;

use crate::nd::airport::Airport;
use crate::nd::airway::Airway;
use crate::nd::classify::TokenType;
use crate::nd::fix::Fix;
use crate::nd::navaid::Navaid;
use crate::nd::procedure::Procedure;
use crate::nd::store::ReferenceDataStore;
use crate::nd::waypoint::Waypoint;
use crate::route::lexer::{self, Word};

/// A classified element of a route string, per spec.md §3.
#[derive(Clone, Debug)]
pub enum RouteToken {
    AirportRef(Rc<Airport>),
    NavaidRef(Rc<Navaid>),
    FixRef(Rc<Fix>),
    AirwayRef(Rc<Airway>),
    ProcedureRef {
        procedure: Rc<Procedure>,
        transition: Option<String>,
    },
    CoordinateLit(f64, f64),
    DirectMarker,
    Unknown(String),
}

/// Classifies every lexed word against `rds`, pushing an ambiguity warning
/// for each identifier that matched more than one [`TokenType`].
pub fn classify(words: &[Word], rds: &ReferenceDataStore, warnings: &mut Vec<String>) -> Vec<RouteToken> {
    words.iter().map(|word| classify_one(word, rds, warnings)).collect()
}

fn classify_one(word: &Word, rds: &ReferenceDataStore, warnings: &mut Vec<String>) -> RouteToken {
    match word {
        Word::Direct => RouteToken::DirectMarker,
        Word::CoordinateLit(raw) => match lexer::parse_coordinate_literal(raw) {
            Some((lat, lon)) => RouteToken::CoordinateLit(lat, lon),
            None => RouteToken::Unknown(raw.clone()),
        },
        Word::Ident(ident) => classify_ident(ident, rds, warnings),
        Word::Dotted(transition, procedure_name) => {
            if rds.classifier().is_ambiguous(procedure_name) {
                warnings.push(format!("ambiguous procedure identifier: {procedure_name}"));
            }
            match rds.classifier().classify(procedure_name) {
                TokenType::Procedure => match rds.classifier().resolve_procedure(procedure_name) {
                    Some((canonical, ambiguous)) => {
                        if ambiguous {
                            warnings.push(format!(
                                "short-form procedure {procedure_name} is ambiguous; used {canonical}"
                            ));
                        }
                        match rds.find_procedure(&canonical) {
                            Some(procedure) => RouteToken::ProcedureRef {
                                procedure,
                                transition: Some(transition.clone()),
                            },
                            None => RouteToken::Unknown(format!("{transition}.{procedure_name}")),
                        }
                    }
                    None => RouteToken::Unknown(format!("{transition}.{procedure_name}")),
                },
                _ => RouteToken::Unknown(format!("{transition}.{procedure_name}")),
            }
        }
    }
}

fn classify_ident(ident: &str, rds: &ReferenceDataStore, warnings: &mut Vec<String>) -> RouteToken {
    if rds.classifier().is_ambiguous(ident) {
        warnings.push(format!("ambiguous identifier: {ident}"));
    }

    match rds.classifier().classify(ident) {
        TokenType::Airport => match rds.find_waypoint(ident) {
            Some(Waypoint::Airport(a)) => RouteToken::AirportRef(a),
            _ => RouteToken::Unknown(ident.to_string()),
        },
        TokenType::Navaid => match rds.find_waypoint(ident) {
            Some(Waypoint::Navaid(n)) => RouteToken::NavaidRef(n),
            _ => RouteToken::Unknown(ident.to_string()),
        },
        TokenType::Fix => match rds.find_waypoint(ident) {
            Some(Waypoint::Fix(f)) => RouteToken::FixRef(f),
            _ => RouteToken::Unknown(ident.to_string()),
        },
        TokenType::Airway => match rds.find_airway(ident) {
            Some(a) => {
                if rds.airway_level_conflict(ident) {
                    warnings.push(format!("airway {ident} is published at more than one level"));
                }
                RouteToken::AirwayRef(a)
            }
            None => RouteToken::Unknown(ident.to_string()),
        },
        TokenType::Procedure => match rds.classifier().resolve_procedure(ident) {
            Some((canonical, ambiguous)) => {
                if ambiguous {
                    warnings.push(format!(
                        "short-form procedure {ident} is ambiguous; used {canonical}"
                    ));
                }
                match rds.find_procedure(&canonical) {
                    Some(procedure) => RouteToken::ProcedureRef {
                        procedure,
                        transition: None,
                    },
                    None => RouteToken::Unknown(ident.to_string()),
                }
            }
            None => RouteToken::Unknown(ident.to_string()),
        },
        TokenType::Coordinate | TokenType::Unknown => RouteToken::Unknown(ident.to_string()),
    }
}
