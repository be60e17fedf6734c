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

//! Maps a route-string identifier to its [`TokenType`] in O(1).

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::OnceLock;

use regex::Regex;

use crate::nd::airport::Airport;
use crate::nd::airway::Airway;
use crate::nd::fix::Fix;
use crate::nd::navaid::Navaid;
use crate::nd::procedure::Procedure;

/// The classification of a route-string identifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenType {
    Airport,
    Navaid,
    Fix,
    Airway,
    Procedure,
    Coordinate,
    Unknown,
}

/// Conflict-resolution priority, most specific first, per spec.md §4.1.
const PRIORITY: [TokenType; 5] = [
    TokenType::Procedure,
    TokenType::Airway,
    TokenType::Airport,
    TokenType::Navaid,
    TokenType::Fix,
];

fn coordinate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{2,4})([NS])/(\d{3,5})([EW])$").expect("static pattern is valid")
    })
}

/// Built once from a populated reference data store; read-only afterward.
#[derive(Debug, Default)]
pub struct TokenClassifier {
    by_ident: HashMap<String, Vec<TokenType>>,
    /// Short-form procedure suffix -> canonical identifiers it could refer
    /// to, sorted so resolution is deterministic.
    procedure_short_forms: HashMap<String, Vec<String>>,
}

impl TokenClassifier {
    pub fn build(
        airports: &[Rc<Airport>],
        navaids: &[Rc<Navaid>],
        fixes: &[Rc<Fix>],
        airways: &[Rc<Airway>],
        procedures: &[Rc<Procedure>],
    ) -> Self {
        let mut classifier = Self::default();

        for airport in airports {
            classifier.register(&airport.icao, TokenType::Airport);
            if let Some(iata) = &airport.iata {
                classifier.register(iata, TokenType::Airport);
            }
        }
        for navaid in navaids {
            classifier.register(&navaid.ident, TokenType::Navaid);
        }
        for fix in fixes {
            classifier.register(&fix.ident, TokenType::Fix);
        }
        for airway in airways {
            classifier.register(&airway.ident, TokenType::Airway);
        }
        for procedure in procedures {
            classifier.register(&procedure.ident, TokenType::Procedure);
            if let Some(short) = procedure.short_form() {
                let entry = classifier
                    .procedure_short_forms
                    .entry(short.to_string())
                    .or_default();
                entry.push(procedure.ident.clone());
                entry.sort();
                classifier.register(short, TokenType::Procedure);
            }
        }

        classifier
    }

    fn register(&mut self, ident: &str, token_type: TokenType) {
        let entry = self.by_ident.entry(ident.to_string()).or_default();
        if !entry.contains(&token_type) {
            entry.push(token_type);
        }
    }

    /// Classifies `ident`. Coordinate literals are recognized purely by
    /// pattern, without a table lookup.
    pub fn classify(&self, ident: &str) -> TokenType {
        if coordinate_pattern().is_match(ident) {
            return TokenType::Coordinate;
        }
        match self.by_ident.get(ident) {
            Some(types) => PRIORITY
                .iter()
                .find(|candidate| types.contains(candidate))
                .copied()
                .unwrap_or(TokenType::Unknown),
            None => TokenType::Unknown,
        }
    }

    /// `true` if `ident` matches more than one distinct [`TokenType`].
    pub fn is_ambiguous(&self, ident: &str) -> bool {
        self.by_ident.get(ident).is_some_and(|types| types.len() > 1)
    }

    /// Resolves a procedure token (canonical or short-form) to the
    /// canonical identifier it refers to, plus whether resolution had to
    /// break a tie among several procedures sharing that short form.
    ///
    /// Per spec.md §9's open question, ties are broken by preferring the
    /// lexicographically first canonical identifier, deterministically.
    pub fn resolve_procedure(&self, ident: &str) -> Option<(String, bool)> {
        if let Some(candidates) = self.procedure_short_forms.get(ident) {
            let chosen = candidates.first()?.clone();
            return Some((chosen, candidates.len() > 1));
        }
        if self
            .by_ident
            .get(ident)
            .is_some_and(|types| types.contains(&TokenType::Procedure))
        {
            return Some((ident.to_string(), false));
        }
        None
    }
}
