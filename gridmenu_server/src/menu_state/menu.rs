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

use std::sync::Arc;

use anyhow::Result;
use gridmenu_core::entry::ItemEntry;
use gridmenu_core::error::MenuError;
use gridmenu_core::notice::Notice;
use gridmenu_core::user::UserId;
use rustc_hash::FxHashMap;

use super::event::InteractionKind;
use crate::presenter::MenuPresenter;

/// Callback bound to one slot of one session. Invoked when a matching
/// interaction event is routed to that slot; the returned [ClickOutcome]
/// is applied by the manager after the handler returns.
pub type SlotHandler = Box<dyn Fn(&ClickContext<'_>) -> Result<ClickOutcome> + Send + Sync>;

/// What the manager should do once a slot handler has run. Handlers never
/// touch the registry themselves; chaining menus happens by returning
/// [ClickOutcome::Navigate] with the next menu to show.
pub enum ClickOutcome {
    /// Nothing further; the click was fully handled (or ignored).
    None,
    /// Re-run the menu's `refresh` and push changed slots to the client.
    Refresh,
    /// Close this menu.
    Close,
    /// Close this menu and open the given one in its place.
    Navigate(Arc<dyn Menu>),
}

/// Passed to a slot handler when its slot is clicked.
pub struct ClickContext<'a> {
    pub(crate) user: &'a UserId,
    pub(crate) kind: InteractionKind,
    pub(crate) clicked: Option<&'a ItemEntry>,
    pub(crate) presenter: &'a dyn MenuPresenter,
}

impl ClickContext<'_> {
    pub fn user(&self) -> &UserId {
        self.user
    }

    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    /// The entry the client reported under the cursor, if any.
    pub fn clicked(&self) -> Option<&ItemEntry> {
        self.clicked
    }

    /// Sends a user-visible notice through the host.
    pub fn notify(&self, notice: &Notice) -> Result<()> {
        self.presenter.send_notice(self.user, notice)
    }
}

/// A modal grid menu. Implementations populate (and re-populate) a
/// [MenuView]; the engine owns everything else: session registration,
/// presentation, event routing, and teardown.
pub trait Menu: Send + Sync {
    fn title(&self) -> String;

    /// (rows, cols) of the grid. Fixed for the lifetime of a session.
    fn dimensions(&self) -> (u32, u32);

    /// Draws the initial contents. Called exactly once per `open()`, on an
    /// empty grid.
    fn initialize_items(&self, view: &mut MenuView<'_>) -> Result<()>;

    /// Redraws the grid to reflect changed backing data. The view still
    /// holds the previous contents; implementations typically clear and
    /// re-draw.
    fn refresh(&self, view: &mut MenuView<'_>) -> Result<()>;

    /// Cleanup hook, run after the session is removed from the registry.
    fn on_close(&self, _user: &UserId) -> Result<()> {
        Ok(())
    }
}

/// Mutable drawing surface over one session's grid and handler table.
/// All slot indices are row-major and checked against the grid capacity;
/// a failed call leaves the grid untouched.
pub struct MenuView<'a> {
    dimensions: (u32, u32),
    entries: &'a mut [Option<ItemEntry>],
    handlers: &'a mut FxHashMap<usize, SlotHandler>,
}

impl<'a> MenuView<'a> {
    pub(crate) fn new(
        dimensions: (u32, u32),
        entries: &'a mut [Option<ItemEntry>],
        handlers: &'a mut FxHashMap<usize, SlotHandler>,
    ) -> MenuView<'a> {
        MenuView {
            dimensions,
            entries,
            handlers,
        }
    }

    /// (rows, cols)
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    fn check_slot(&self, slot: usize) -> Result<()> {
        if slot >= self.entries.len() {
            return Err(MenuError::SlotOutOfRange {
                slot,
                capacity: self.entries.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Places an entry with no click behavior. Any handler previously bound
    /// to the slot is unbound.
    pub fn set_item(&mut self, slot: usize, entry: ItemEntry) -> Result<()> {
        self.check_slot(slot)?;
        self.entries[slot] = Some(entry);
        self.handlers.remove(&slot);
        Ok(())
    }

    /// Places an entry and binds a handler to the slot, replacing any prior
    /// entry and binding.
    pub fn set_item_with_handler<F>(&mut self, slot: usize, entry: ItemEntry, handler: F) -> Result<()>
    where
        F: Fn(&ClickContext<'_>) -> Result<ClickOutcome> + Send + Sync + 'static,
    {
        self.set_item_boxed(slot, entry, Box::new(handler))
    }

    pub(crate) fn set_item_boxed(
        &mut self,
        slot: usize,
        entry: ItemEntry,
        handler: SlotHandler,
    ) -> Result<()> {
        self.check_slot(slot)?;
        self.entries[slot] = Some(entry);
        self.handlers.insert(slot, handler);
        Ok(())
    }

    /// Empties a slot, unbinding its handler if one was set.
    pub fn clear_slot(&mut self, slot: usize) -> Result<()> {
        self.check_slot(slot)?;
        self.entries[slot] = None;
        self.handlers.remove(&slot);
        Ok(())
    }

    /// Empties every slot. Useful at the top of `refresh` implementations.
    pub fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = None;
        }
        self.handlers.clear();
    }

    /// Fills every currently empty slot with a copy of the given decorative
    /// placeholder. Populated slots are never overwritten, and no handlers
    /// are bound.
    pub fn fill_empty(&mut self, filler: &ItemEntry) {
        for entry in self.entries.iter_mut() {
            if entry.is_none() {
                *entry = Some(filler.clone());
            }
        }
    }

    pub fn entry(&self, slot: usize) -> Option<&ItemEntry> {
        self.entries.get(slot).and_then(|x| x.as_ref())
    }

    pub fn is_slot_empty(&self, slot: usize) -> bool {
        self.entry(slot).is_none()
    }
}
