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

//! Context-free lexing of a route string into [`Word`]s.
//!
//! This phase only recognizes *shape* — plain identifier, dotted pair,
//! coordinate literal, or the `DCT` marker — it does not consult the
//! reference data store. That happens one phase later, in
//! [`crate::route::token`].

use std::sync::OnceLock;

use regex::Regex;

/// A lexical token shape, before any RDS lookup.
#[derive(Clone, PartialEq, Debug)]
pub enum Word {
    /// A plain identifier, `[A-Z0-9]+`.
    Ident(String),
    /// `lhs.rhs`, e.g. `KAYYS.WYNDE3`.
    Dotted(String, String),
    /// A raw FAA coordinate literal, not yet parsed to decimal degrees.
    CoordinateLit(String),
    /// The literal `DCT` direct-routing marker.
    Direct,
}

fn coordinate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{2,4})([NS])/(\d{3,5})([EW])$").expect("static pattern is valid")
    })
}

/// Splits `route` on whitespace and classifies each piece's shape, in
/// order.
pub fn lex(route: &str) -> Vec<Word> {
    route.split_whitespace().map(word_of).collect()
}

fn word_of(raw: &str) -> Word {
    if raw == "DCT" {
        Word::Direct
    } else if coordinate_pattern().is_match(raw) {
        Word::CoordinateLit(raw.to_string())
    } else if let Some((lhs, rhs)) = raw.split_once('.') {
        Word::Dotted(lhs.to_string(), rhs.to_string())
    } else {
        Word::Ident(raw.to_string())
    }
}

/// Parses a matched coordinate literal (`DD(DD)?[NS]/DDD(DD)?[EW]`) to
/// decimal-degree `(lat, lon)`. A minutes field of `60` rolls to the next
/// degree.
pub fn parse_coordinate_literal(raw: &str) -> Option<(f64, f64)> {
    let caps = coordinate_pattern().captures(raw)?;
    let lat = parse_component(&caps[1], true)?;
    let lat = if &caps[2] == "S" { -lat } else { lat };
    let lon = parse_component(&caps[3], false)?;
    let lon = if &caps[4] == "W" { -lon } else { lon };
    Some((lat, lon))
}

fn parse_component(digits: &str, is_lat: bool) -> Option<f64> {
    let degree_digits = if is_lat { 2 } else { 3 };
    let (deg_str, min_str) = digits.split_at(degree_digits.min(digits.len()));
    let mut degrees: f64 = deg_str.parse().ok()?;
    let mut minutes: f64 = if min_str.is_empty() {
        0.0
    } else {
        min_str.parse().ok()?
    };
    if minutes >= 60.0 {
        degrees += 1.0;
        minutes = 0.0;
    }
    Some(degrees + minutes / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_plain_and_dotted_and_direct() {
        let words = lex("KORD J146 KAYYS.WYNDE3 DCT KLGA");
        assert_eq!(
            words,
            vec![
                Word::Ident("KORD".into()),
                Word::Ident("J146".into()),
                Word::Dotted("KAYYS".into(), "WYNDE3".into()),
                Word::Direct,
                Word::Ident("KLGA".into()),
            ]
        );
    }

    #[test]
    fn lexes_coordinate_literal() {
        let words = lex("4814N/06848W");
        assert_eq!(words, vec![Word::CoordinateLit("4814N/06848W".into())]);
    }

    #[test]
    fn parses_coordinate_literal() {
        let (lat, lon) = parse_coordinate_literal("4814N/06848W").unwrap();
        assert!((lat - 48.2333).abs() < 1e-3);
        assert!((lon - (-68.8)).abs() < 1e-3);
    }

    #[test]
    fn minutes_sixty_rolls_to_next_degree() {
        let (lat, _) = parse_coordinate_literal("4860N/06800W").unwrap();
        assert!((lat - 49.0).abs() < 1e-6);
    }

    #[test]
    fn degree_only_literal() {
        let (lat, lon) = parse_coordinate_literal("48N/068W").unwrap();
        assert!((lat - 48.0).abs() < 1e-6);
        assert!((lon - (-68.0)).abs() < 1e-6);
    }
}
