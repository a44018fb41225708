// Copyright 2023 drey7925
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
//
// SPDX-License-Identifier: Apache-2.0

//! Game-facing menu content built on the gridmenu engine: an intent
//! dispatcher that maps named requests ("main", "town_hall", ...) onto
//! concrete menus, the menus themselves, and the read-only domain queries
//! they draw from.

/// Read-only domain queries the built-in menus consult (kingdom
/// membership, professions), plus an in-memory implementation.
pub mod directory;
/// Maps intent names to menu constructors and guards the flows that have
/// preconditions.
pub mod dispatch;
/// The built-in menus.
pub mod menus;
/// RON-backed settings for the built-in menus.
pub mod settings;
