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

//! Spherical-Earth great-circle geodesy.
//!
//! All formulas use a sphere of radius [`EARTH_RADIUS_NM`], not the WGS84
//! ellipsoid, so results are deterministic and reproducible across
//! implementations to within the tolerances in the testable properties —
//! at the cost of a few tenths of a percent of accuracy relative to an
//! ellipsoidal model. Intermediate angles are radians; degrees only cross
//! the boundary at this module's public functions.

use crate::geom::coordinate::Coordinate;
use crate::measurements::constants::EARTH_RADIUS_NM;

fn rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Wraps `degrees` into `[0, 360)`.
pub fn normalize_deg(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Haversine great-circle distance between `a` and `b`, in nautical miles.
pub fn distance_nm(a: &Coordinate, b: &Coordinate) -> f64 {
    let phi1 = rad(a.latitude);
    let phi2 = rad(b.latitude);
    let d_phi = rad(b.latitude - a.latitude);
    let d_lambda = rad(b.longitude - a.longitude);

    let sin_half_phi = (d_phi / 2.0).sin();
    let sin_half_lambda = (d_lambda / 2.0).sin();

    let h = sin_half_phi * sin_half_phi + phi1.cos() * phi2.cos() * sin_half_lambda * sin_half_lambda;
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_NM * c
}

/// Initial true bearing flying the great circle from `a` to `b`, normalized
/// to `[0, 360)` degrees.
pub fn bearing_true(a: &Coordinate, b: &Coordinate) -> f64 {
    let phi1 = rad(a.latitude);
    let phi2 = rad(b.latitude);
    let d_lambda = rad(b.longitude - a.longitude);

    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();

    normalize_deg(y.atan2(x).to_degrees())
}

/// Forward geodesic: the point reached by flying `bearing_deg` true for
/// `distance_nm` nautical miles starting at `start`.
pub fn destination(start: &Coordinate, bearing_deg: f64, distance_nm: f64) -> Coordinate {
    let delta = distance_nm / EARTH_RADIUS_NM;
    let theta = rad(bearing_deg);
    let phi1 = rad(start.latitude);
    let lambda1 = rad(start.longitude);

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    Coordinate::new(
        phi2.to_degrees(),
        normalize_deg(lambda2.to_degrees() + 180.0) - 180.0,
    )
}

/// Signed perpendicular distance from `p` to the great circle through `a`
/// and `b`, in nautical miles.
///
/// Positive means `p` is to the right of the course from `a` to `b`,
/// negative to the left. If the perpendicular foot falls outside the
/// segment `[a, b]`, the result is clamped to the (signed) distance to the
/// nearer endpoint rather than the unbounded cross-track value.
pub fn cross_track_nm(p: &Coordinate, a: &Coordinate, b: &Coordinate) -> f64 {
    let leg_len = distance_nm(a, b);
    if leg_len < 1e-9 {
        return distance_nm(a, p);
    }

    let delta_13 = distance_nm(a, p) / EARTH_RADIUS_NM;
    let theta_13 = rad(bearing_true(a, p));
    let theta_12 = rad(bearing_true(a, b));

    let dxt = (delta_13.sin() * (theta_13 - theta_12).sin()).asin() * EARTH_RADIUS_NM;

    let cos_delta_xt = (dxt / EARTH_RADIUS_NM).cos();
    let along_track_nm = if cos_delta_xt.abs() < 1e-12 {
        0.0
    } else {
        (delta_13.cos() / cos_delta_xt).clamp(-1.0, 1.0).acos() * EARTH_RADIUS_NM
    };

    if along_track_nm < 0.0 {
        dxt.signum() * distance_nm(a, p)
    } else if along_track_nm > leg_len {
        dxt.signum() * distance_nm(b, p)
    } else {
        dxt
    }
}
