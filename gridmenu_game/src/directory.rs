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

use std::collections::HashMap;

use gridmenu_core::user::UserId;
use parking_lot::RwLock;

/// One kingdom as shown in the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KingdomSummary {
    pub name: String,
    pub member_count: u32,
    pub has_town_hall: bool,
}

/// One profession of one user, as shown in the details menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfessionProgress {
    pub name: String,
    pub level: u32,
    pub experience: u32,
    pub next_level_at: u32,
}

/// Read-only queries the built-in menus make against the game's domain
/// state. The game server implements this against its own storage; menus
/// only ever read through it.
pub trait KingdomDirectory: Send + Sync {
    /// The kingdom the user belongs to, if any.
    fn membership(&self, user: &UserId) -> Option<String>;

    /// Whether the kingdom has a constructed town hall.
    fn has_town_hall(&self, kingdom: &str) -> bool;

    /// All known kingdoms, in no particular order.
    fn kingdoms(&self) -> Vec<KingdomSummary>;

    /// The user's professions, in display order.
    fn professions(&self, user: &UserId) -> Vec<ProfessionProgress>;

    fn profession(&self, user: &UserId, name: &str) -> Option<ProfessionProgress> {
        self.professions(user)
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Default)]
struct DirectoryData {
    memberships: HashMap<UserId, String>,
    kingdoms: HashMap<String, KingdomSummary>,
    professions: HashMap<UserId, Vec<ProfessionProgress>>,
}

/// Directory backed by in-memory maps. Used by tests and the demo binary;
/// real servers implement [KingdomDirectory] against their own state.
pub struct InMemoryDirectory {
    data: RwLock<DirectoryData>,
}

impl InMemoryDirectory {
    pub fn new() -> InMemoryDirectory {
        InMemoryDirectory {
            data: RwLock::new(DirectoryData::default()),
        }
    }

    /// Adds or replaces a kingdom.
    pub fn put_kingdom(&self, kingdom: KingdomSummary) {
        self.data
            .write()
            .kingdoms
            .insert(kingdom.name.clone(), kingdom);
    }

    pub fn set_membership(&self, user: UserId, kingdom: impl Into<String>) {
        self.data.write().memberships.insert(user, kingdom.into());
    }

    pub fn put_profession(&self, user: UserId, progress: ProfessionProgress) {
        let mut data = self.data.write();
        let professions = data.professions.entry(user).or_default();
        match professions.iter_mut().find(|p| p.name == progress.name) {
            Some(existing) => *existing = progress,
            None => professions.push(progress),
        }
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl KingdomDirectory for InMemoryDirectory {
    fn membership(&self, user: &UserId) -> Option<String> {
        self.data.read().memberships.get(user).cloned()
    }

    fn has_town_hall(&self, kingdom: &str) -> bool {
        self.data
            .read()
            .kingdoms
            .get(kingdom)
            .is_some_and(|k| k.has_town_hall)
    }

    fn kingdoms(&self) -> Vec<KingdomSummary> {
        self.data.read().kingdoms.values().cloned().collect()
    }

    fn professions(&self, user: &UserId) -> Vec<ProfessionProgress> {
        self.data
            .read()
            .professions
            .get(user)
            .cloned()
            .unwrap_or_default()
    }
}
