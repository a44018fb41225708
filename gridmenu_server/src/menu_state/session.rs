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

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use anyhow::{Context, Result};
use gridmenu_core::entry::ItemEntry;
use gridmenu_core::error::MenuError;
use gridmenu_core::user::UserId;
use rustc_hash::FxHashMap;

use super::menu::{Menu, MenuView, SlotHandler};

/// Opaque identifier for one presented grid. Fresh for every `open()`, so a
/// stale event carrying an old grid id can never be confused with the live
/// session.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct GridId(pub(crate) u64);

impl GridId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

static GRID_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

fn next_grid_id() -> GridId {
    GridId(GRID_ID_COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst))
}

/// The live binding of a user to their currently open menu: the drawn grid,
/// the slot handler table, and the menu that built them. Owned exclusively
/// by the registry from `open()` until `close()` or replacement.
pub struct MenuSession {
    user: UserId,
    grid_id: GridId,
    dimensions: (u32, u32),
    grid: Vec<Option<ItemEntry>>,
    handlers: FxHashMap<usize, SlotHandler>,
    menu: Arc<dyn Menu>,
}

impl MenuSession {
    pub(crate) fn new(user: UserId, menu: Arc<dyn Menu>) -> Result<MenuSession> {
        let dimensions = menu.dimensions();
        if dimensions.0 == 0 || dimensions.1 == 0 {
            return Err(MenuError::InvalidDimensions(dimensions.0, dimensions.1).into());
        }
        // Promoting to usize first would be more correct, but nobody should
        // be creating a 4-billion-slot menu.
        let len = dimensions
            .0
            .checked_mul(dimensions.1)
            .with_context(|| MenuError::InvalidDimensions(dimensions.0, dimensions.1))?;
        let mut grid = Vec::new();
        grid.resize_with(len as usize, || None);
        Ok(MenuSession {
            user,
            grid_id: next_grid_id(),
            dimensions,
            grid,
            handlers: FxHashMap::default(),
            menu,
        })
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }

    pub fn grid_id(&self) -> GridId {
        self.grid_id
    }

    /// (rows, cols)
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    pub fn capacity(&self) -> usize {
        self.grid.len()
    }

    pub fn entries(&self) -> &[Option<ItemEntry>] {
        &self.grid
    }

    pub fn menu(&self) -> &Arc<dyn Menu> {
        &self.menu
    }

    pub(crate) fn handler(&self, slot: usize) -> Option<&SlotHandler> {
        self.handlers.get(&slot)
    }

    /// Borrows the grid and handler table as a mutable surface for
    /// `initialize_items`/`refresh` to draw into.
    pub(crate) fn view(&mut self) -> MenuView<'_> {
        MenuView::new(self.dimensions, &mut self.grid, &mut self.handlers)
    }
}
