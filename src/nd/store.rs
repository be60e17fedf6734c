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

//! The reference data store: in-memory, built once, read-only afterward.

use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use crate::nd::airport::Airport;
use crate::nd::airway::Airway;
use crate::nd::classify::TokenClassifier;
use crate::nd::fix::Fix;
use crate::nd::navaid::Navaid;
use crate::nd::procedure::Procedure;
use crate::nd::query::QueryEngine;
use crate::nd::waypoint::Waypoint;

/// Airports, navaids, fixes, airways, and procedures, plus the classifier
/// and spatial index built over them. Constructed once via
/// [`ReferenceDataStoreBuilder`]; every accessor is `&self`.
pub struct ReferenceDataStore {
    airports: Vec<Rc<Airport>>,
    navaids: Vec<Rc<Navaid>>,
    fixes: Vec<Rc<Fix>>,
    airways: Vec<Rc<Airway>>,
    procedures: Vec<Rc<Procedure>>,
    by_ident: HashMap<String, Waypoint>,
    /// Every airway registered under a given identifier, in insertion
    /// order. Usually length 1; longer when the same identifier is
    /// published at more than one level (see
    /// [`ReferenceDataStore::airway_level_conflict`]).
    airways_by_ident: HashMap<String, Vec<Rc<Airway>>>,
    procedures_by_ident: HashMap<String, Rc<Procedure>>,
    classifier: TokenClassifier,
    query: QueryEngine,
}

impl ReferenceDataStore {
    pub fn airports(&self) -> &[Rc<Airport>] {
        &self.airports
    }

    pub fn navaids(&self) -> &[Rc<Navaid>] {
        &self.navaids
    }

    pub fn fixes(&self) -> &[Rc<Fix>] {
        &self.fixes
    }

    pub fn airways(&self) -> &[Rc<Airway>] {
        &self.airways
    }

    pub fn procedures(&self) -> &[Rc<Procedure>] {
        &self.procedures
    }

    pub fn classifier(&self) -> &TokenClassifier {
        &self.classifier
    }

    pub fn query(&self) -> &QueryEngine {
        &self.query
    }

    /// Resolves an identifier (airport ICAO/IATA, navaid, or fix) to its
    /// waypoint. Does not resolve airways or procedures, which expand to
    /// many waypoints rather than being one.
    pub fn find_waypoint(&self, ident: &str) -> Option<Waypoint> {
        self.by_ident.get(ident).cloned()
    }

    /// The airway registered under `ident`. When the identifier is
    /// published at more than one level, returns the first one added,
    /// deterministically — see [`Self::airway_level_conflict`] to detect
    /// that case and warn on it.
    pub fn find_airway(&self, ident: &str) -> Option<Rc<Airway>> {
        self.airways_by_ident.get(ident).and_then(|airways| airways.first()).cloned()
    }

    /// `true` if `ident` is registered to airways at more than one
    /// [`crate::nd::airway::AirwayLevel`], per spec.md §4.4's
    /// "airway level mismatch" warning condition.
    pub fn airway_level_conflict(&self, ident: &str) -> bool {
        self.airways_by_ident
            .get(ident)
            .is_some_and(|airways| airways.iter().map(|a| a.level).collect::<std::collections::HashSet<_>>().len() > 1)
    }

    /// Looks up a procedure by its canonical identifier only (callers
    /// resolve short forms through [`TokenClassifier::resolve_procedure`]
    /// first).
    pub fn find_procedure(&self, canonical_ident: &str) -> Option<Rc<Procedure>> {
        self.procedures_by_ident.get(canonical_ident).cloned()
    }
}

/// Accumulates reference data, then freezes it into a
/// [`ReferenceDataStore`].
#[derive(Default)]
pub struct ReferenceDataStoreBuilder {
    airports: Vec<Rc<Airport>>,
    navaids: Vec<Rc<Navaid>>,
    fixes: Vec<Rc<Fix>>,
    airways: Vec<Rc<Airway>>,
    procedures: Vec<Rc<Procedure>>,
}

impl ReferenceDataStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_airport(&mut self, airport: Airport) -> &mut Self {
        self.airports.push(Rc::new(airport));
        self
    }

    pub fn add_navaid(&mut self, navaid: Navaid) -> &mut Self {
        self.navaids.push(Rc::new(navaid));
        self
    }

    pub fn add_fix(&mut self, fix: Fix) -> &mut Self {
        self.fixes.push(Rc::new(fix));
        self
    }

    pub fn add_airway(&mut self, airway: Airway) -> &mut Self {
        self.airways.push(Rc::new(airway));
        self
    }

    pub fn add_procedure(&mut self, procedure: Procedure) -> &mut Self {
        self.procedures.push(Rc::new(procedure));
        self
    }

    /// Freezes the accumulated data into a read-only
    /// [`ReferenceDataStore`], building the token classifier and spatial
    /// index over it.
    pub fn build(self) -> ReferenceDataStore {
        debug!(
            "building reference data store: {} airports, {} navaids, {} fixes, {} airways, {} procedures",
            self.airports.len(),
            self.navaids.len(),
            self.fixes.len(),
            self.airways.len(),
            self.procedures.len(),
        );

        let classifier = TokenClassifier::build(
            &self.airports,
            &self.navaids,
            &self.fixes,
            &self.airways,
            &self.procedures,
        );
        let query = QueryEngine::build(&self.airports, &self.navaids, &self.fixes);

        let mut by_ident = HashMap::new();
        for airport in &self.airports {
            by_ident.insert(airport.icao.clone(), Waypoint::Airport(airport.clone()));
            if let Some(iata) = &airport.iata {
                by_ident
                    .entry(iata.clone())
                    .or_insert_with(|| Waypoint::Airport(airport.clone()));
            }
        }
        for navaid in &self.navaids {
            by_ident
                .entry(navaid.ident.clone())
                .or_insert_with(|| Waypoint::Navaid(navaid.clone()));
        }
        for fix in &self.fixes {
            by_ident
                .entry(fix.ident.clone())
                .or_insert_with(|| Waypoint::Fix(fix.clone()));
        }

        let mut airways_by_ident: HashMap<String, Vec<Rc<Airway>>> = HashMap::new();
        for airway in &self.airways {
            airways_by_ident.entry(airway.ident.clone()).or_default().push(airway.clone());
        }
        let procedures_by_ident = self
            .procedures
            .iter()
            .map(|p| (p.ident.clone(), p.clone()))
            .collect();

        ReferenceDataStore {
            airports: self.airports,
            navaids: self.navaids,
            fixes: self.fixes,
            airways: self.airways,
            procedures: self.procedures,
            by_ident,
            airways_by_ident,
            procedures_by_ident,
            classifier,
            query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Coordinate;

    #[test]
    fn find_waypoint_prefers_icao_over_iata_entry_but_both_resolve() {
        let mut builder = ReferenceDataStoreBuilder::new();
        builder.add_airport(Airport {
            icao: "KORD".into(),
            iata: Some("ORD".into()),
            name: "O'Hare".into(),
            coordinate: Coordinate::new(41.9786, -87.9048),
            elevation_ft: 672,
            airspace_class: None,
            runways: Vec::new(),
            frequencies: Vec::new(),
        });
        let rds = builder.build();
        assert!(rds.find_waypoint("KORD").is_some());
        assert!(rds.find_waypoint("ORD").is_some());
        assert!(rds.find_waypoint("ZZZZ").is_none());
    }

    #[test]
    fn airway_level_conflict_detected_when_ident_published_at_two_levels() {
        let mut builder = ReferenceDataStoreBuilder::new();
        builder.add_airway(crate::nd::airway::Airway {
            ident: "J146".into(),
            level: crate::nd::airway::AirwayLevel::Low,
            fixes: vec!["GERBS".into(), "MIP".into()],
        });
        builder.add_airway(crate::nd::airway::Airway {
            ident: "J146".into(),
            level: crate::nd::airway::AirwayLevel::High,
            fixes: vec!["GERBS".into(), "MIP".into()],
        });
        let rds = builder.build();
        assert!(rds.airway_level_conflict("J146"));
        assert!(rds.find_airway("J146").is_some());
    }

    #[test]
    fn airway_level_conflict_false_for_single_level_airway() {
        let mut builder = ReferenceDataStoreBuilder::new();
        builder.add_airway(crate::nd::airway::Airway {
            ident: "V1".into(),
            level: crate::nd::airway::AirwayLevel::Low,
            fixes: vec!["GERBS".into(), "MIP".into()],
        });
        let rds = builder.build();
        assert!(!rds.airway_level_conflict("V1"));
        assert!(!rds.airway_level_conflict("NOPE"));
    }
}
