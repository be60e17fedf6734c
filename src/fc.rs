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

//! Free-standing numeric helpers too small to deserve their own module.

/// Converts degrees/minutes/seconds to a decimal degree magnitude.
///
/// Takes the unsigned magnitude only; callers apply sign separately.
pub fn dms_to_decimal(degrees: u8, minutes: u8, seconds: u8) -> f64 {
    degrees as f64 + minutes as f64 / 60.0 + seconds as f64 / 3_600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_dms() {
        assert!((dms_to_decimal(48, 14, 0) - 48.2333).abs() < 1e-3);
    }
}
