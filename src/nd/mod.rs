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

//! Reference data store: in-memory aeronautical tables, the token
//! classifier, and the spatial query engine built over them.

pub mod airport;
pub mod airway;
pub mod classify;
pub mod fix;
pub mod navaid;
pub mod procedure;
pub mod query;
pub mod store;
pub mod waypoint;

pub use airport::Airport;
pub use airway::Airway;
pub use classify::{TokenClassifier, TokenType};
pub use fix::Fix;
pub use navaid::Navaid;
pub use procedure::Procedure;
pub use query::QueryEngine;
pub use store::{ReferenceDataStore, ReferenceDataStoreBuilder};
pub use waypoint::Waypoint;
