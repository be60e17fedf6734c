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

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fc;
use crate::geom::geodesy;
use crate::measurements::{Angle, Length};

/// A latitude/longitude pair.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<geo::Coord<f64>> for Coordinate {
    fn from(c: geo::Coord<f64>) -> Self {
        Self {
            latitude: c.y,
            longitude: c.x,
        }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(p: geo::Point<f64>) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Great-circle distance to `other` on a sphere of radius
    /// [`crate::measurements::constants::EARTH_RADIUS_NM`].
    pub fn dist(&self, other: &Coordinate) -> Length {
        Length::nm(geodesy::distance_nm(self, other) as f32)
    }

    /// Initial true bearing from this point to `other`, normalized to
    /// `[0, 360)`.
    pub fn bearing(&self, other: &Coordinate) -> Angle {
        Angle::t(geodesy::bearing_true(self, other) as f32)
    }

    /// Destination point starting here, flying `bearing` for `distance`.
    pub fn destination(&self, bearing: Angle, distance: Length) -> Coordinate {
        geodesy::destination(
            self,
            bearing.value().to_owned() as f64,
            distance.convert_to(crate::measurements::LengthUnit::NauticalMiles).value().to_owned() as f64,
        )
    }

    pub fn from_dms(latitude: (i8, u8, u8), longitude: (i16, u8, u8)) -> Self {
        Self {
            latitude: latitude.0.signum() as f64
                * fc::dms_to_decimal(latitude.0.unsigned_abs(), latitude.1, latitude.2),
            longitude: longitude.0.signum() as f64
                * fc::dms_to_decimal(longitude.0.unsigned_abs() as u8, longitude.1, longitude.2),
        }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({0}, {1})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::LengthUnit;

    const KORD: Coordinate = Coordinate {
        latitude: 41.9786,
        longitude: -87.9048,
    };
    const KLGA: Coordinate = Coordinate {
        latitude: 40.7769,
        longitude: -73.8740,
    };

    #[test]
    fn distance_kord_klga() {
        let d = KORD.dist(&KLGA).convert_to(LengthUnit::NauticalMiles);
        assert!((d.value() - 639.6).abs() < 2.0);
    }

    #[test]
    fn bearing_kord_klga() {
        let b = KORD.bearing(&KLGA);
        assert!((b.value() - 96.0).abs() < 2.0);
    }
}
