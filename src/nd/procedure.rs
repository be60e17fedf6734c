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

use std::sync::OnceLock;

use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProcedureKind {
    Sid,
    Star,
    Approach,
}

/// A named on-ramp (SID) or off-ramp (STAR) of fixes for a procedure body.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transition {
    pub name: String,
    pub fixes: Vec<String>,
}

/// A published SID, STAR, or instrument approach.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Procedure {
    /// Canonical identifier, e.g. `MIP.MIP4` or a bare `WYNDE3`.
    pub ident: String,
    pub kind: ProcedureKind,
    pub airport_icao: String,
    pub body: Vec<String>,
    pub transitions: Vec<Transition>,
}

fn short_form_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"([A-Z]+[0-9]+)$").expect("static pattern is valid"))
}

impl Procedure {
    /// Extracts the short-form suffix from the canonical identifier by the
    /// rule "letters then digits at the end of the canonical id", e.g.
    /// `MIP.MIP4` -> `MIP4`. `None` if the canonical identifier has no such
    /// trailing run (it already is the short form).
    pub fn short_form(&self) -> Option<&str> {
        short_form_pattern()
            .captures(&self.ident)
            .map(|c| c.get(1).unwrap().as_str())
            .filter(|short| *short != self.ident)
    }

    pub fn transition(&self, name: &str) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.name == name)
    }

    /// Expands this procedure without an explicit transition: just the
    /// body, in order.
    pub fn expand_body(&self) -> Vec<String> {
        self.body.clone()
    }

    /// Expands `transition.procedure` notation: the transition's fixes
    /// followed by the body, with the junction fix (last of the
    /// transition, first of the body) de-duplicated.
    pub fn expand_with_transition(&self, transition: &Transition) -> Vec<String> {
        let mut fixes = transition.fixes.clone();
        let mut body = self.body.clone();
        if let (Some(last), Some(first)) = (fixes.last(), body.first()) {
            if last == first {
                body.remove(0);
            }
        }
        fixes.extend(body);
        fixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wynde3() -> Procedure {
        Procedure {
            ident: "WYNDE3".into(),
            kind: ProcedureKind::Star,
            airport_icao: "KLGA".into(),
            body: vec!["WYNDE", "BAAKE", "KLGA"]
                .into_iter()
                .map(String::from)
                .collect(),
            transitions: vec![Transition {
                name: "KAYYS".into(),
                fixes: vec!["KAYYS".into(), "WYNDE".into()],
            }],
        }
    }

    #[test]
    fn short_form_of_bare_ident_is_none() {
        assert_eq!(wynde3().short_form(), None);
    }

    #[test]
    fn short_form_of_canonical_id() {
        let mut p = wynde3();
        p.ident = "MIP.MIP4".into();
        assert_eq!(p.short_form(), Some("MIP4"));
    }

    #[test]
    fn expand_with_transition_dedups_junction() {
        let p = wynde3();
        let t = p.transition("KAYYS").unwrap();
        assert_eq!(
            p.expand_with_transition(t),
            vec!["KAYYS", "WYNDE", "BAAKE", "KLGA"]
        );
    }

    #[test]
    fn expand_body_only() {
        assert_eq!(wynde3().expand_body(), vec!["WYNDE", "BAAKE", "KLGA"]);
    }
}
