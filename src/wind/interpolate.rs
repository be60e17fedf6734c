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

//! Winds-aloft interpolation: a vertical step per station (bracket
//! altitude levels), then a horizontal step (inverse-distance-weighted
//! blend of the k=3 nearest stations), per spec.md §4.5.

use log::trace;

use crate::geom::{geodesy, Coordinate};
use crate::wind::model::{Level, StationForecast};

const NEAREST_STATIONS: usize = 3;

/// The wind at a query point: direction/speed/temperature, with a flag
/// for whether the query altitude fell outside any bracketing station's
/// level range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindSample {
    pub dir_true: f64,
    pub speed_kt: f64,
    pub temp_c: Option<f64>,
    /// `true` if the query altitude was clamped to a station's lowest or
    /// highest level rather than genuinely bracketed.
    pub boundary: bool,
}

fn to_uv(dir_true: f64, speed: f64) -> (f64, f64) {
    let rad = dir_true.to_radians();
    (speed * rad.sin(), speed * rad.cos())
}

fn from_uv(u: f64, v: f64) -> (f64, f64) {
    (geodesy::normalize_deg(u.atan2(v).to_degrees()), (u * u + v * v).sqrt())
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Brackets `altitude_ft` against a station's levels. `None` if the
/// station has no levels at all.
fn vertical_sample(levels: &[Level], altitude_ft: f64) -> Option<WindSample> {
    if levels.is_empty() {
        return None;
    }
    let mut sorted: Vec<&Level> = levels.iter().collect();
    sorted.sort_by(|a, b| a.altitude_ft.total_cmp(&b.altitude_ft));

    let lowest = sorted[0];
    let highest = *sorted.last().unwrap();

    if altitude_ft <= lowest.altitude_ft {
        return Some(WindSample {
            dir_true: lowest.dir_true,
            speed_kt: lowest.speed_kt,
            temp_c: lowest.temp_c,
            boundary: true,
        });
    }
    if altitude_ft >= highest.altitude_ft {
        return Some(WindSample {
            dir_true: highest.dir_true,
            speed_kt: highest.speed_kt,
            temp_c: highest.temp_c,
            boundary: true,
        });
    }

    let pair = sorted.windows(2).find(|w| w[0].altitude_ft <= altitude_ft && altitude_ft <= w[1].altitude_ft);
    let (lo, hi) = match pair {
        Some(w) => (w[0], w[1]),
        None => return Some(WindSample {
            dir_true: highest.dir_true,
            speed_kt: highest.speed_kt,
            temp_c: highest.temp_c,
            boundary: true,
        }),
    };

    let t = if (hi.altitude_ft - lo.altitude_ft).abs() < 1e-9 {
        0.0
    } else {
        (altitude_ft - lo.altitude_ft) / (hi.altitude_ft - lo.altitude_ft)
    };

    let speed = lerp(lo.speed_kt, hi.speed_kt, t);
    let temp = match (lo.temp_c, hi.temp_c) {
        (Some(a), Some(b)) => Some(lerp(a, b, t)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    };

    let (u_lo, v_lo) = to_uv(lo.dir_true, lo.speed_kt);
    let (u_hi, v_hi) = to_uv(hi.dir_true, hi.speed_kt);
    let (dir_true, _) = from_uv(lerp(u_lo, u_hi, t), lerp(v_lo, v_hi, t));

    Some(WindSample {
        dir_true,
        speed_kt: speed,
        temp_c: temp,
        boundary: false,
    })
}

/// Interpolates wind at `(lat, lon, altitude_ft)` from `stations`.
/// `None` if `stations` is empty or every station has no levels.
pub fn interpolate(stations: &[StationForecast], lat: f64, lon: f64, altitude_ft: f64) -> Option<WindSample> {
    if stations.is_empty() {
        return None;
    }

    let origin = Coordinate::new(lat, lon);
    let mut candidates: Vec<(f64, WindSample)> = stations
        .iter()
        .filter_map(|s| {
            let sample = vertical_sample(&s.levels, altitude_ft)?;
            let distance = geodesy::distance_nm(&origin, &Coordinate::new(s.lat, s.lon));
            Some((distance, sample))
        })
        .collect();

    if candidates.is_empty() {
        return None;
    }

    if let Some((_, sample)) = candidates.iter().find(|(d, _)| *d < 1e-6) {
        trace!("wind interpolate: exact station colocation, returning directly");
        return Some(*sample);
    }

    if candidates.len() == 1 {
        return Some(candidates[0].1);
    }

    candidates.sort_by(|a, b| a.0.total_cmp(&b.0));
    candidates.truncate(NEAREST_STATIONS);

    let mut u_sum = 0.0;
    let mut v_sum = 0.0;
    let mut temp_weighted = 0.0;
    let mut temp_weight = 0.0;
    let mut weight_sum = 0.0;
    let mut any_boundary = false;

    for (distance, sample) in &candidates {
        let weight = 1.0 / (distance * distance).max(1e-6);
        let (u, v) = to_uv(sample.dir_true, sample.speed_kt);
        u_sum += u * weight;
        v_sum += v * weight;
        if let Some(temp) = sample.temp_c {
            temp_weighted += temp * weight;
            temp_weight += weight;
        }
        weight_sum += weight;
        any_boundary |= sample.boundary;
    }

    let (dir_true, speed_kt) = from_uv(u_sum / weight_sum, v_sum / weight_sum);
    let temp_c = (temp_weight > 0.0).then(|| temp_weighted / temp_weight);

    Some(WindSample {
        dir_true,
        speed_kt,
        temp_c,
        boundary: any_boundary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: &str, lat: f64, lon: f64, levels: Vec<Level>) -> StationForecast {
        StationForecast {
            station_id: id.into(),
            lat,
            lon,
            levels,
        }
    }

    fn level(alt: f64, dir: f64, spd: f64, temp: f64) -> Level {
        Level {
            altitude_ft: alt,
            dir_true: dir,
            speed_kt: spd,
            temp_c: Some(temp),
        }
    }

    #[test]
    fn zero_stations_is_none() {
        assert!(interpolate(&[], 40.0, -80.0, 6000.0).is_none());
    }

    #[test]
    fn one_station_is_vertical_only() {
        let stations = vec![station(
            "A",
            40.0,
            -80.0,
            vec![level(3000.0, 270.0, 20.0, 10.0), level(9000.0, 270.0, 40.0, -2.0)],
        )];
        let sample = interpolate(&stations, 41.0, -81.0, 6000.0).unwrap();
        assert!((sample.speed_kt - 30.0).abs() < 1e-6);
        assert!(!sample.boundary);
    }

    #[test]
    fn altitude_below_lowest_clamps_with_boundary_flag() {
        let stations = vec![station(
            "A",
            40.0,
            -80.0,
            vec![level(3000.0, 270.0, 20.0, 10.0), level(9000.0, 270.0, 40.0, -2.0)],
        )];
        let sample = interpolate(&stations, 40.0, -80.0, 0.0).unwrap();
        assert!((sample.speed_kt - 20.0).abs() < 1e-6);
        assert!(sample.boundary);
    }

    #[test]
    fn exact_colocation_returns_that_station_directly() {
        let stations = vec![
            station("A", 40.0, -80.0, vec![level(6000.0, 270.0, 20.0, 5.0)]),
            station("B", 45.0, -85.0, vec![level(6000.0, 90.0, 50.0, 5.0)]),
        ];
        let sample = interpolate(&stations, 40.0, -80.0, 6000.0).unwrap();
        assert!((sample.dir_true - 270.0).abs() < 1e-6);
        assert!((sample.speed_kt - 20.0).abs() < 1e-6);
    }
}
