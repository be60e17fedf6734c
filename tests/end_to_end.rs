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

//! The six end-to-end scenarios, exercised against the public API only.

use chrono::{TimeZone, Utc};

use navlog::nd::airport::Airport;
use navlog::nd::airway::{Airway, AirwayLevel};
use navlog::nd::fix::Fix;
use navlog::nd::procedure::{Procedure, ProcedureKind, Transition};
use navlog::prelude::*;
use navlog::route;

fn airport(icao: &str, lat: f64, lon: f64) -> Airport {
    Airport {
        icao: icao.into(),
        iata: None,
        name: icao.into(),
        coordinate: Coordinate::new(lat, lon),
        elevation_ft: 0,
        airspace_class: None,
        runways: Vec::new(),
        frequencies: Vec::new(),
    }
}

fn fix(ident: &str, lat: f64, lon: f64) -> Fix {
    Fix {
        ident: ident.into(),
        coordinate: Coordinate::new(lat, lon),
        is_reporting_point: false,
    }
}

#[test]
fn scenario_one_direct_route_no_winds() {
    let mut builder = ReferenceDataStoreBuilder::new();
    builder.add_airport(airport("KORD", 41.9786, -87.9048));
    builder.add_airport(airport("KLGA", 40.7769, -73.8740));
    let rds = builder.build();

    let expansion = route::decode("KORD KLGA", &rds);
    assert!(expansion.errors.is_empty());
    assert_eq!(expansion.waypoints.len(), 2);

    let result = RouteCalculator::new()
        .waypoints(expansion.waypoints)
        .tas_kt(140.0)
        .altitude_ft(7000.0)
        .departure_utc(Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap())
        .calculate()
        .unwrap();

    assert_eq!(result.navlog.legs.len(), 1);
    let leg = &result.navlog.legs[0];
    assert!((leg.distance_nm - 639.6).abs() < 2.0);
    assert!((leg.true_course - 96.0).abs() < 2.0);
    assert_eq!(leg.mag_heading, Some(leg.mag_course));
    assert_eq!(leg.ground_speed, Some(140.0));
    assert!((leg.leg_time_min.unwrap() - 274.0).abs() < 3.0);
}

#[test]
fn scenario_two_airway_expansion() {
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
        fixes: vec!["GERBS", "FIXO1", "FIXO2", "MIP"].into_iter().map(String::from).collect(),
    });
    let rds = builder.build();

    let expansion = route::decode("GERBS J146 MIP", &rds);
    assert!(expansion.errors.is_empty());
    let idents: Vec<String> = expansion.waypoints.iter().map(Waypoint::ident).collect();
    assert_eq!(idents, vec!["GERBS", "FIXO1", "FIXO2", "MIP"]);
}

#[test]
fn scenario_three_transition_procedure() {
    let mut builder = ReferenceDataStoreBuilder::new();
    builder.add_airport(airport("KORD", 41.9786, -87.9048));
    builder.add_airport(airport("KLGA", 40.7769, -73.8740));
    for (ident, lat, lon) in [("KAYYS", 42.0, -73.0), ("WYNDE", 41.9, -73.2), ("BAAKE", 41.8, -73.5)] {
        builder.add_fix(fix(ident, lat, lon));
    }
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

    let expansion = route::decode("KORD KAYYS.WYNDE3 KLGA", &rds);
    assert!(expansion.errors.is_empty());
    let idents: Vec<String> = expansion.waypoints.iter().map(Waypoint::ident).collect();
    assert_eq!(idents, vec!["KORD", "KAYYS", "WYNDE", "BAAKE", "KLGA"]);
}

#[test]
fn scenario_four_coordinate_literal() {
    let rds = ReferenceDataStoreBuilder::new().build();
    let expansion = route::decode("4814N/06848W", &rds);
    assert!(expansion.errors.is_empty());
    assert_eq!(expansion.waypoints.len(), 1);
    match &expansion.waypoints[0] {
        Waypoint::Coordinate(c) => {
            assert!((c.latitude - 48.2333).abs() < 1e-3);
            assert!((c.longitude - (-68.8)).abs() < 1e-3);
        }
        other => panic!("expected a Coordinate waypoint, got {other:?}"),
    }
}

#[test]
fn scenario_five_winds_triangle() {
    let triangle = route::leg::wind_triangle(90.0, 0.0, 360.0, 40.0, 100.0).unwrap();
    assert!((triangle.wca_deg - 23.58).abs() < 0.05);
    assert!((triangle.true_heading - 113.58).abs() < 0.05);
    assert!((triangle.ground_speed - 91.65).abs() < 0.05);
}

#[test]
fn scenario_six_unflyable_leg() {
    let waypoints = vec![
        Waypoint::Coordinate(Coordinate::new(41.0, -80.0)),
        Waypoint::Coordinate(Coordinate::new(41.0, -79.3)),
        Waypoint::Coordinate(Coordinate::new(41.0, -78.6)),
    ];
    let forecast = WindForecast {
        stations: vec![StationForecast {
            station_id: "TEST".into(),
            lat: 41.0,
            lon: -79.0,
            levels: vec![navlog::wind::Level {
                altitude_ft: 5000.0,
                dir_true: 180.0,
                speed_kt: 60.0,
                temp_c: Some(10.0),
            }],
        }],
        use_window: UseWindow {
            from_utc: Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap(),
            to_utc: Utc.with_ymd_and_hms(2026, 6, 2, 0, 0, 0).unwrap(),
        },
        parsed_at: Utc.with_ymd_and_hms(2026, 6, 1, 11, 0, 0).unwrap(),
    };

    let result = RouteCalculator::new()
        .waypoints(waypoints)
        .tas_kt(40.0)
        .altitude_ft(5000.0)
        .departure_utc(Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap())
        .winds(forecast)
        .calculate()
        .unwrap();

    assert_eq!(result.navlog.legs.len(), 2);
    let first = &result.navlog.legs[0];
    assert!(first.numeric_warning.is_some());
    assert!(first.mag_heading.is_none());
    assert!(first.ground_speed.is_none());

    let second = &result.navlog.legs[1];
    assert!(second.distance_nm > 0.0);
}
