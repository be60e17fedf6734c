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

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirwayLevel {
    Low,
    High,
}

/// A published air route: an ordered sequence of fix identifiers.
///
/// `fixes` holds identifiers only, not object references, so airways never
/// form a reference cycle with the fixes/navaids/airports they traverse —
/// resolution happens through the [`crate::nd::store::ReferenceDataStore`]
/// at expansion time.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airway {
    pub ident: String,
    pub level: AirwayLevel,
    pub fixes: Vec<String>,
}

impl Airway {
    /// Index of `ident` among this airway's member fixes, if present.
    pub fn position_of(&self, ident: &str) -> Option<usize> {
        self.fixes.iter().position(|f| f == ident)
    }

    /// The sub-sequence of member fixes strictly between `from` and `to`
    /// (exclusive of both), in the direction implied by their positions.
    ///
    /// Returns `None` if either endpoint is not a member of this airway.
    pub fn between(&self, from: &str, to: &str) -> Option<Vec<String>> {
        let i = self.position_of(from)?;
        let j = self.position_of(to)?;
        if i <= j {
            Some(self.fixes[i + 1..j].to_vec())
        } else {
            let mut segment: Vec<String> = self.fixes[j + 1..i].to_vec();
            segment.reverse();
            Some(segment)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn j146() -> Airway {
        Airway {
            ident: "J146".into(),
            level: AirwayLevel::High,
            fixes: vec!["GERBS", "FIXO1", "FIXO2", "MIP"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    #[test]
    fn between_forward() {
        assert_eq!(
            j146().between("GERBS", "MIP"),
            Some(vec!["FIXO1".to_string(), "FIXO2".to_string()])
        );
    }

    #[test]
    fn between_reversed() {
        assert_eq!(
            j146().between("MIP", "GERBS"),
            Some(vec!["FIXO2".to_string(), "FIXO1".to_string()])
        );
    }

    #[test]
    fn between_same_endpoint_is_empty() {
        assert_eq!(j146().between("GERBS", "GERBS"), Some(Vec::new()));
    }

    #[test]
    fn between_unknown_fix_is_none() {
        assert_eq!(j146().between("GERBS", "ZZZZZ"), None);
    }
}
