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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::Coordinate;

/// The radio navaid family, per spec.md §3.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavaidType {
    Vor,
    Vortac,
    VorDme,
    Ndb,
    Dme,
    Tacan,
}

impl NavaidType {
    /// `true` for VHF navaids, whose frequency is expressed in MHz rather
    /// than kHz.
    pub fn is_vhf(&self) -> bool {
        !matches!(self, Self::Ndb)
    }
}

/// A radio navigation station, per the spec's `Waypoint::Navaid` variant.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Navaid {
    pub ident: String,
    pub kind: NavaidType,
    pub coordinate: Coordinate,
    /// MHz for VHF navaids (VOR, VORTAC, VOR/DME, DME, TACAN), kHz for NDB.
    pub frequency: f32,
}

impl Navaid {
    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndb_is_not_vhf() {
        assert!(!NavaidType::Ndb.is_vhf());
        assert!(NavaidType::Vor.is_vhf());
    }
}
