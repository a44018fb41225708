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

use gridmenu_core::entry::ItemEntry;
use gridmenu_core::user::UserId;

use super::session::GridId;

/// How the user clicked a slot, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    LeftClick,
    RightClick,
    ShiftLeftClick,
    ShiftRightClick,
    DoubleClick,
    Drop,
}

/// A click inside a presented grid, delivered by the host. The grid id is
/// whatever the host was told in `show_grid`; events from grids the
/// registry no longer tracks are passed through untouched.
#[derive(Clone, Debug)]
pub struct InteractionEvent {
    pub user: UserId,
    pub grid_id: GridId,
    pub slot: usize,
    pub kind: InteractionKind,
    /// The entry the client claims was under the cursor, if any. Informational;
    /// the handler table is keyed by slot, not by entry.
    pub clicked: Option<ItemEntry>,
}

/// The host closed (or the user dismissed) a presented grid.
#[derive(Clone, Debug)]
pub struct DismissEvent {
    pub user: UserId,
    pub grid_id: GridId,
}

/// What the host should do with the underlying input event after the menu
/// layer has seen it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionDisposition {
    /// The event targeted a live menu; the host must suppress its default
    /// handling (menus are purely routed, never physical).
    Suppress,
    /// Not ours: no session, or a stale grid id. The host proceeds as if the
    /// menu layer did not exist.
    PassThrough,
}
