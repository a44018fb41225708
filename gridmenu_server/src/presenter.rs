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

use anyhow::Result;
use gridmenu_core::entry::ItemEntry;
use gridmenu_core::notice::Notice;
use gridmenu_core::user::UserId;
use parking_lot::Mutex;

use crate::menu_state::session::GridId;

/// The host side of the menu layer: whatever actually renders grids on a
/// client's screen and delivers messages to them. The engine only ever
/// talks to a presenter; it never owns a network connection or a window.
pub trait MenuPresenter: Send + Sync {
    /// Present a grid to the user, replacing whatever modal view they had.
    fn show_grid(
        &self,
        user: &UserId,
        grid_id: GridId,
        title: &str,
        dimensions: (u32, u32),
        entries: &[Option<ItemEntry>],
    ) -> Result<()>;

    /// Dismiss the given grid for the user. The host should not send a
    /// [DismissEvent](crate::menu_state::event::DismissEvent) back for a
    /// dismissal it was asked to perform, but the engine tolerates one.
    fn dismiss_grid(&self, user: &UserId, grid_id: GridId) -> Result<()>;

    /// Redraw a single slot of a live presented grid.
    fn update_slot(
        &self,
        user: &UserId,
        grid_id: GridId,
        slot: usize,
        entry: Option<&ItemEntry>,
    ) -> Result<()>;

    /// Deliver a user-visible message (chat line, toast, etc).
    fn send_notice(&self, user: &UserId, notice: &Notice) -> Result<()>;
}

/// One call observed by [RecordingPresenter].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresenterCall {
    ShowGrid {
        user: UserId,
        grid_id: GridId,
        title: String,
        dimensions: (u32, u32),
        entries: Vec<Option<ItemEntry>>,
    },
    DismissGrid {
        user: UserId,
        grid_id: GridId,
    },
    UpdateSlot {
        user: UserId,
        grid_id: GridId,
        slot: usize,
        entry: Option<ItemEntry>,
    },
    SendNotice {
        user: UserId,
        notice: Notice,
    },
}

/// Test-only presenter that records every host call in order.
pub struct RecordingPresenter {
    calls: Mutex<Vec<PresenterCall>>,
}

impl RecordingPresenter {
    pub fn new() -> RecordingPresenter {
        RecordingPresenter {
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns everything recorded so far, leaving the log intact.
    pub fn calls(&self) -> Vec<PresenterCall> {
        self.calls.lock().clone()
    }

    /// Drains the recorded calls.
    pub fn take_calls(&self) -> Vec<PresenterCall> {
        std::mem::take(&mut *self.calls.lock())
    }

    /// The entries of the most recent `show_grid` for the user, if any.
    pub fn last_shown_entries(&self, user: &UserId) -> Option<Vec<Option<ItemEntry>>> {
        self.calls
            .lock()
            .iter()
            .rev()
            .find_map(|call| match call {
                PresenterCall::ShowGrid {
                    user: u, entries, ..
                } if u == user => Some(entries.clone()),
                _ => None,
            })
    }

    pub fn notices_for(&self, user: &UserId) -> Vec<Notice> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                PresenterCall::SendNotice { user: u, notice } if u == user => {
                    Some(notice.clone())
                }
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuPresenter for RecordingPresenter {
    fn show_grid(
        &self,
        user: &UserId,
        grid_id: GridId,
        title: &str,
        dimensions: (u32, u32),
        entries: &[Option<ItemEntry>],
    ) -> Result<()> {
        self.calls.lock().push(PresenterCall::ShowGrid {
            user: user.clone(),
            grid_id,
            title: title.to_string(),
            dimensions,
            entries: entries.to_vec(),
        });
        Ok(())
    }

    fn dismiss_grid(&self, user: &UserId, grid_id: GridId) -> Result<()> {
        self.calls.lock().push(PresenterCall::DismissGrid {
            user: user.clone(),
            grid_id,
        });
        Ok(())
    }

    fn update_slot(
        &self,
        user: &UserId,
        grid_id: GridId,
        slot: usize,
        entry: Option<&ItemEntry>,
    ) -> Result<()> {
        self.calls.lock().push(PresenterCall::UpdateSlot {
            user: user.clone(),
            grid_id,
            slot,
            entry: entry.cloned(),
        });
        Ok(())
    }

    fn send_notice(&self, user: &UserId, notice: &Notice) -> Result<()> {
        self.calls.lock().push(PresenterCall::SendNotice {
            user: user.clone(),
            notice: notice.clone(),
        });
        Ok(())
    }
}
