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

use thiserror::Error;

/// Errors raised by the menu layer itself. Domain-guard failures are not
/// errors; they surface as [notices](crate::notice::Notice) to the user.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MenuError {
    /// A slot index outside the grid was passed to a mutating call.
    /// The grid is left untouched.
    #[error("Slot {slot} out of range for a grid with {capacity} slots")]
    SlotOutOfRange { slot: usize, capacity: usize },
    /// Grid dimensions with zero rows/columns, or whose product overflows.
    #[error("Invalid grid dimensions {0}x{1}")]
    InvalidDimensions(u32, u32),
    /// An intent name was registered twice with a dispatcher.
    #[error("Intent {0} already registered")]
    DuplicateIntent(String),
}
