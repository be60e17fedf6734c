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

//! Spatial and identifier queries over the reference data store.

use std::rc::Rc;

use log::warn;
use rstar::primitives::GeomWithData;
use rstar::{RTree, AABB};

use crate::geom::{geodesy, Coordinate};
use crate::nd::airport::Airport;
use crate::nd::classify::{TokenClassifier, TokenType};
use crate::nd::fix::Fix;
use crate::nd::navaid::Navaid;

/// Which waypoint kinds a search should consider.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct KindsMask {
    pub airports: bool,
    pub navaids: bool,
    pub fixes: bool,
}

impl Default for KindsMask {
    fn default() -> Self {
        Self {
            airports: true,
            navaids: true,
            fixes: true,
        }
    }
}

/// A lat/lon bounding box, `min <= max` on both axes.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    fn is_valid(&self) -> bool {
        self.min_lat <= self.max_lat && self.min_lon <= self.max_lon
    }
}

/// The result of a point query: every matching entity, grouped by kind.
#[derive(Clone, Debug, Default)]
pub struct PointQueryResult {
    pub airports: Vec<Rc<Airport>>,
    pub navaids: Vec<Rc<Navaid>>,
    pub fixes: Vec<Rc<Fix>>,
}

impl PointQueryResult {
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty() && self.navaids.is_empty() && self.fixes.is_empty()
    }
}

#[derive(Clone, Debug)]
enum Indexed {
    Airport(Rc<Airport>),
    Navaid(Rc<Navaid>),
    Fix(Rc<Fix>),
}

impl Indexed {
    fn coordinate(&self) -> Coordinate {
        match self {
            Self::Airport(a) => a.coordinate,
            Self::Navaid(n) => n.coordinate,
            Self::Fix(f) => f.coordinate,
        }
    }
}

type IndexEntry = GeomWithData<[f64; 2], Indexed>;

/// Spatial queries over airports, navaids, and fixes (airways and
/// procedures are not point entities and are not indexed here).
pub struct QueryEngine {
    tree: RTree<IndexEntry>,
}

impl QueryEngine {
    pub fn build(airports: &[Rc<Airport>], navaids: &[Rc<Navaid>], fixes: &[Rc<Fix>]) -> Self {
        let mut entries = Vec::with_capacity(airports.len() + navaids.len() + fixes.len());
        for a in airports {
            entries.push(IndexEntry::new(
                [a.coordinate.longitude, a.coordinate.latitude],
                Indexed::Airport(a.clone()),
            ));
        }
        for n in navaids {
            entries.push(IndexEntry::new(
                [n.coordinate.longitude, n.coordinate.latitude],
                Indexed::Navaid(n.clone()),
            ));
        }
        for f in fixes {
            entries.push(IndexEntry::new(
                [f.coordinate.longitude, f.coordinate.latitude],
                Indexed::Fix(f.clone()),
            ));
        }
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    fn group(items: impl Iterator<Item = Indexed>) -> PointQueryResult {
        let mut result = PointQueryResult::default();
        for item in items {
            match item {
                Indexed::Airport(a) => result.airports.push(a),
                Indexed::Navaid(n) => result.navaids.push(n),
                Indexed::Fix(f) => result.fixes.push(f),
            }
        }
        result
    }

    /// Every airport/navaid/fix inside `bounds`.
    pub fn points_in_bounds(&self, bounds: Bounds) -> PointQueryResult {
        if !bounds.is_valid() {
            warn!("pointsInBounds: invalid bounds {bounds:?}");
            return PointQueryResult::default();
        }
        let aabb = AABB::from_corners(
            [bounds.min_lon, bounds.min_lat],
            [bounds.max_lon, bounds.max_lat],
        );
        Self::group(
            self.tree
                .locate_in_envelope(&aabb)
                .map(|e| e.data.clone()),
        )
    }

    /// Every airport/navaid/fix within `radius_nm` of `(lat, lon)`,
    /// restricted to `kinds`.
    ///
    /// Two-phase: a degree-approximate bounding-box prefilter against the
    /// R-tree, then an exact great-circle distance check.
    pub fn points_within_radius(
        &self,
        lat: f64,
        lon: f64,
        radius_nm: f64,
        kinds: KindsMask,
    ) -> PointQueryResult {
        const NM_PER_DEGREE: f64 = 60.0;
        let lat_pad = radius_nm / NM_PER_DEGREE;
        let lon_pad = radius_nm / (NM_PER_DEGREE * lat.to_radians().cos().max(1e-6));

        let aabb = AABB::from_corners([lon - lon_pad, lat - lat_pad], [lon + lon_pad, lat + lat_pad]);
        let origin = Coordinate::new(lat, lon);

        let filtered = self
            .tree
            .locate_in_envelope(&aabb)
            .map(|e| e.data.clone())
            .filter(|item| match item {
                Indexed::Airport(_) => kinds.airports,
                Indexed::Navaid(_) => kinds.navaids,
                Indexed::Fix(_) => kinds.fixes,
            })
            .filter(|item| geodesy::distance_nm(&origin, &item.coordinate()) <= radius_nm);

        Self::group(filtered)
    }

    /// The nearest airport to `(lat, lon)`, optionally restricted by
    /// `filter`. Ties broken by ICAO lexical order.
    pub fn nearest_airport(
        &self,
        lat: f64,
        lon: f64,
        filter: Option<&dyn Fn(&Airport) -> bool>,
    ) -> Option<Rc<Airport>> {
        let origin = Coordinate::new(lat, lon);
        self.tree
            .iter()
            .filter_map(|e| match &e.data {
                Indexed::Airport(a) => Some(a.clone()),
                _ => None,
            })
            .filter(|a| filter.is_none_or(|f| f(a)))
            .min_by(|a, b| {
                let da = geodesy::distance_nm(&origin, &a.coordinate);
                let db = geodesy::distance_nm(&origin, &b.coordinate);
                da.partial_cmp(&db)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.icao.cmp(&b.icao))
            })
    }

    /// Airports whose ICAO, IATA, or name starts with `prefix`
    /// (case-insensitive), ranked exact-code first, then ICAO-prefix,
    /// IATA-prefix, name-prefix, other.
    pub fn search_airports(&self, prefix: &str, limit: usize) -> Vec<Rc<Airport>> {
        let needle = prefix.to_ascii_uppercase();
        let mut matches: Vec<(u8, Rc<Airport>)> = self
            .tree
            .iter()
            .filter_map(|e| match &e.data {
                Indexed::Airport(a) => Some(a.clone()),
                _ => None,
            })
            .filter_map(|a| airport_rank(&a, &needle).map(|rank| (rank, a)))
            .collect();
        matches.sort_by(|(ra, a), (rb, b)| ra.cmp(rb).then_with(|| a.icao.cmp(&b.icao)));
        matches.into_iter().take(limit).map(|(_, a)| a).collect()
    }

    /// Identifiers of any kind in `kinds` that start with `prefix`.
    pub fn search_waypoints(&self, prefix: &str, kinds: KindsMask, limit: usize) -> PointQueryResult {
        let needle = prefix.to_ascii_uppercase();
        let mut result = PointQueryResult::default();
        for entry in self.tree.iter() {
            if result.airports.len() + result.navaids.len() + result.fixes.len() >= limit {
                break;
            }
            match &entry.data {
                Indexed::Airport(a) if kinds.airports && a.icao.starts_with(&needle) => {
                    result.airports.push(a.clone())
                }
                Indexed::Navaid(n) if kinds.navaids && n.ident.starts_with(&needle) => {
                    result.navaids.push(n.clone())
                }
                Indexed::Fix(f) if kinds.fixes && f.ident.starts_with(&needle) => {
                    result.fixes.push(f.clone())
                }
                _ => {}
            }
        }
        result
    }

    /// Every indexed point within `corridor_nm` of any leg in `legs`
    /// (leg endpoints expressed as `(from, to)` coordinate pairs).
    pub fn points_near_route(&self, legs: &[(Coordinate, Coordinate)], corridor_nm: f64) -> PointQueryResult {
        Self::group(self.tree.iter().map(|e| e.data.clone()).filter(|item| {
            let p = item.coordinate();
            legs.iter()
                .any(|(a, b)| geodesy::cross_track_nm(&p, a, b).abs() <= corridor_nm)
        }))
    }

    pub fn get_token_type(&self, classifier: &TokenClassifier, ident: &str) -> TokenType {
        classifier.classify(ident)
    }
}

fn airport_rank(airport: &Airport, needle: &str) -> Option<u8> {
    let icao = airport.icao.to_ascii_uppercase();
    let iata = airport.iata.as_deref().map(str::to_ascii_uppercase);
    let name = airport.name.to_ascii_uppercase();

    if icao == needle || iata.as_deref() == Some(needle) {
        Some(0)
    } else if icao.starts_with(needle) {
        Some(1)
    } else if iata.as_deref().is_some_and(|i| i.starts_with(needle)) {
        Some(2)
    } else if name.split_whitespace().any(|tok| tok.starts_with(needle)) {
        Some(3)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ord() -> Rc<Airport> {
        Rc::new(Airport {
            icao: "KORD".into(),
            iata: Some("ORD".into()),
            name: "Chicago O'Hare Intl".into(),
            coordinate: Coordinate::new(41.9786, -87.9048),
            elevation_ft: 672,
            airspace_class: None,
            runways: Vec::new(),
            frequencies: Vec::new(),
        })
    }

    fn lga() -> Rc<Airport> {
        Rc::new(Airport {
            icao: "KLGA".into(),
            iata: Some("LGA".into()),
            name: "LaGuardia".into(),
            coordinate: Coordinate::new(40.7769, -73.8740),
            elevation_ft: 21,
            airspace_class: None,
            runways: Vec::new(),
            frequencies: Vec::new(),
        })
    }

    #[test]
    fn nearest_airport_prefers_closer() {
        let engine = QueryEngine::build(&[ord(), lga()], &[], &[]);
        let nearest = engine.nearest_airport(40.8, -73.9, None).unwrap();
        assert_eq!(nearest.icao, "KLGA");
    }

    #[test]
    fn within_radius_zero_only_exact_colocation() {
        let engine = QueryEngine::build(&[ord(), lga()], &[], &[]);
        let result = engine.points_within_radius(41.9786, -87.9048, 0.0, KindsMask::default());
        assert_eq!(result.airports.len(), 1);
        assert_eq!(result.airports[0].icao, "KORD");
    }

    #[test]
    fn invalid_bounds_returns_empty() {
        let engine = QueryEngine::build(&[ord(), lga()], &[], &[]);
        let result = engine.points_in_bounds(Bounds {
            min_lat: 50.0,
            max_lat: 10.0,
            min_lon: -90.0,
            max_lon: -70.0,
        });
        assert!(result.is_empty());
    }

    #[test]
    fn search_airports_ranks_exact_code_first() {
        let engine = QueryEngine::build(&[ord(), lga()], &[], &[]);
        let results = engine.search_airports("KLGA", 10);
        assert_eq!(results[0].icao, "KLGA");
    }
}
