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

use std::collections::hash_map::Entry;

use gridmenu_core::user::UserId;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use super::session::{GridId, MenuSession};

/// Tracks which menu each user currently has open: at most one
/// [MenuSession] per user, last-writer-wins. An instance is plain data
/// with no global registration; construct one per server (or per test)
/// and hand it to a [MenuManager](super::MenuManager).
pub struct MenuRegistry {
    sessions: Mutex<FxHashMap<UserId, MenuSession>>,
}

impl MenuRegistry {
    pub fn new() -> MenuRegistry {
        MenuRegistry {
            sessions: Mutex::new(FxHashMap::default()),
        }
    }

    /// Registers a session for its user, returning the displaced session if
    /// one was still present.
    pub(crate) fn put(&self, session: MenuSession) -> Option<MenuSession> {
        self.sessions
            .lock()
            .insert(session.user().clone(), session)
    }

    pub(crate) fn remove(&self, user: &UserId) -> Option<MenuSession> {
        self.sessions.lock().remove(user)
    }

    /// Removes the user's session only if it is the one presenting the given
    /// grid. Used on host-initiated dismissals, where a stale grid id must
    /// not tear down a newer session.
    pub(crate) fn remove_matching(&self, user: &UserId, grid_id: GridId) -> Option<MenuSession> {
        match self.sessions.lock().entry(user.clone()) {
            Entry::Occupied(entry) => {
                if entry.get().grid_id() == grid_id {
                    Some(entry.remove())
                } else {
                    None
                }
            }
            Entry::Vacant(_) => None,
        }
    }

    /// Runs `f` against the user's live session, if any, under the registry
    /// lock. Callers must not re-enter the registry from `f`.
    pub(crate) fn with_session<T>(
        &self,
        user: &UserId,
        f: impl FnOnce(&mut MenuSession) -> T,
    ) -> Option<T> {
        self.sessions.lock().get_mut(user).map(f)
    }

    pub fn has(&self, user: &UserId) -> bool {
        self.sessions.lock().contains_key(user)
    }

    /// The grid the user currently has open, if any.
    pub fn grid_id_for(&self, user: &UserId) -> Option<GridId> {
        self.sessions.lock().get(user).map(|s| s.grid_id())
    }

    pub fn open_count(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}

impl Default for MenuRegistry {
    fn default() -> Self {
        Self::new()
    }
}
