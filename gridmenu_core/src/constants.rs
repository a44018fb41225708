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

/// Largest quantity a single grid entry may display. Builder quantities are
/// clamped into [1, MAX_STACK].
pub const MAX_STACK: u32 = 64;

/// Number of columns in a standard menu grid. Menus are free to use other
/// widths; this is the conventional one.
pub const STANDARD_COLUMNS: u32 = 9;

/// Item kinds for the built-in decorative entries.
pub mod decor {
    /// Inert pane used to fill unused slots.
    pub const PANE: &str = "decor:pane";
    /// Left-pointing arrow, used for "previous page" and "back".
    pub const ARROW_LEFT: &str = "decor:arrow_left";
    /// Right-pointing arrow, used for "next page".
    pub const ARROW_RIGHT: &str = "decor:arrow_right";
    /// Barrier cross, used for "close".
    pub const BARRIER: &str = "decor:barrier";
}
