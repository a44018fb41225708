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

pub mod event;
pub(crate) mod handlers;
pub mod menu;
pub mod registry;
pub mod session;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use anyhow::{bail, Result};
use gridmenu_core::entry::ItemEntry;
use gridmenu_core::user::UserId;

use self::event::{DismissEvent, InteractionDisposition, InteractionEvent};
use self::handlers::run_handler_impl;
use self::menu::{ClickContext, ClickOutcome, Menu, SlotHandler};
use self::registry::MenuRegistry;
use self::session::{GridId, MenuSession};
use crate::presenter::MenuPresenter;

/// Owns the menu lifecycle for one server: opening and closing sessions,
/// and routing host events to slot handlers.
///
/// The manager is the single subscriber to the host's event stream; menus
/// never subscribe individually, so there is nothing to double-register or
/// leak when a session is replaced. Both the registry and the presenter are
/// injected, so tests can run many fake users against private instances.
pub struct MenuManager {
    registry: Arc<MenuRegistry>,
    presenter: Arc<dyn MenuPresenter>,
}

impl MenuManager {
    pub fn new(registry: Arc<MenuRegistry>, presenter: Arc<dyn MenuPresenter>) -> Arc<MenuManager> {
        Arc::new(MenuManager {
            registry,
            presenter,
        })
    }

    pub fn registry(&self) -> &MenuRegistry {
        self.registry.as_ref()
    }

    pub fn presenter(&self) -> &dyn MenuPresenter {
        self.presenter.as_ref()
    }

    /// Opens a menu for the user and presents it, replacing (and properly
    /// closing) any menu they already had open. Returns the id of the newly
    /// presented grid.
    pub fn open(&self, user: &UserId, menu: Arc<dyn Menu>) -> Result<GridId> {
        // The previous session must be fully torn down before the new one is
        // registered; a bare registry overwrite would leave the old grid
        // presented with no session behind it.
        self.close(user)?;

        let mut session = MenuSession::new(user.clone(), menu.clone())?;
        {
            let mut view = session.view();
            run_handler_impl(|| menu.initialize_items(&mut view), "initialize_items")?;
        }
        let grid_id = session.grid_id();
        let dimensions = session.dimensions();
        let entries = session.entries().to_vec();

        if let Some(displaced) = self.registry.put(session) {
            log::error!(
                "Session {:?} for {} was still registered while opening {:?}",
                displaced.grid_id(),
                user,
                grid_id
            );
        }
        if let Err(e) = self
            .presenter
            .show_grid(user, grid_id, &menu.title(), dimensions, &entries)
        {
            self.registry.remove(user);
            return Err(e);
        }
        log::info!("Opened grid {:?} for {}", grid_id, user);
        Ok(grid_id)
    }

    /// Dismisses and tears down the user's open menu, if any. Closing twice
    /// is a no-op the second time.
    pub fn close(&self, user: &UserId) -> Result<()> {
        if let Some(session) = self.registry.remove(user) {
            self.presenter.dismiss_grid(user, session.grid_id())?;
            run_handler_impl(|| session.menu().on_close(user), "on_close")?;
            log::info!("Closed grid {:?} for {}", session.grid_id(), user);
        }
        Ok(())
    }

    /// Re-runs the open menu's `refresh` and pushes any slots it changed to
    /// the client. A user with no open menu is a no-op.
    pub fn refresh(&self, user: &UserId) -> Result<()> {
        type Changed = Vec<(usize, Option<ItemEntry>)>;
        let refreshed = self
            .registry
            .with_session(user, |session| -> Result<(GridId, Changed)> {
                let before = session.entries().to_vec();
                let menu = session.menu().clone();
                let grid_id = session.grid_id();
                {
                    let mut view = session.view();
                    run_handler_impl(|| menu.refresh(&mut view), "refresh")?;
                }
                let changed = before
                    .iter()
                    .zip(session.entries().iter())
                    .enumerate()
                    .filter(|(_, (old, new))| old != new)
                    .map(|(slot, (_, new))| (slot, new.clone()))
                    .collect();
                Ok((grid_id, changed))
            });
        match refreshed {
            None => Ok(()),
            Some(Err(e)) => Err(e),
            Some(Ok((grid_id, changed))) => {
                for (slot, entry) in &changed {
                    self.presenter
                        .update_slot(user, grid_id, *slot, entry.as_ref())?;
                }
                Ok(())
            }
        }
    }

    /// Mutates one slot of the user's live presented grid, optionally
    /// rebinding its handler, and pushes the change to the client.
    pub fn set_item(
        &self,
        user: &UserId,
        slot: usize,
        entry: ItemEntry,
        handler: Option<SlotHandler>,
    ) -> Result<()> {
        let entry_for_update = entry.clone();
        let updated = self.registry.with_session(user, |session| -> Result<GridId> {
            let mut view = session.view();
            match handler {
                Some(h) => view.set_item_boxed(slot, entry, h)?,
                None => view.set_item(slot, entry)?,
            }
            Ok(session.grid_id())
        });
        match updated {
            None => bail!("No open menu for {}", user),
            Some(Err(e)) => Err(e),
            Some(Ok(grid_id)) => {
                self.presenter
                    .update_slot(user, grid_id, slot, Some(&entry_for_update))
            }
        }
    }

    /// Routes a click inside a presented grid. Events that match the user's
    /// live session are suppressed on the host side and dispatched to the
    /// bound slot handler (an unmapped slot is simply no action); events
    /// for grids the registry no longer tracks pass through untouched.
    pub fn handle_interaction(&self, event: &InteractionEvent) -> Result<InteractionDisposition> {
        let routed = self
            .registry
            .with_session(&event.user, |session| -> Result<Option<ClickOutcome>> {
                if session.grid_id() != event.grid_id {
                    log::debug!(
                        "Dropping interaction from {} for stale grid {:?} (live: {:?})",
                        event.user,
                        event.grid_id,
                        session.grid_id()
                    );
                    return Ok(None);
                }
                if event.slot >= session.capacity() {
                    // The host reported a slot we never drew; nothing bound there.
                    log::debug!(
                        "Interaction at slot {} beyond capacity {} of grid {:?}",
                        event.slot,
                        session.capacity(),
                        event.grid_id
                    );
                    return Ok(Some(ClickOutcome::None));
                }
                match session.handler(event.slot) {
                    None => Ok(Some(ClickOutcome::None)),
                    Some(handler) => {
                        let ctx = ClickContext {
                            user: &event.user,
                            kind: event.kind,
                            clicked: event.clicked.as_ref(),
                            presenter: self.presenter.as_ref(),
                        };
                        run_handler_impl(|| handler(&ctx), "slot_click").map(Some)
                    }
                }
            });
        match routed {
            None => Ok(InteractionDisposition::PassThrough),
            Some(Ok(None)) => Ok(InteractionDisposition::PassThrough),
            Some(Err(e)) => Err(e),
            Some(Ok(Some(outcome))) => {
                // Applied outside the registry lock, so a handler can close
                // its own menu or chain into another without re-entrancy.
                self.apply_outcome(&event.user, outcome)?;
                Ok(InteractionDisposition::Suppress)
            }
        }
    }

    fn apply_outcome(&self, user: &UserId, outcome: ClickOutcome) -> Result<()> {
        match outcome {
            ClickOutcome::None => Ok(()),
            ClickOutcome::Refresh => self.refresh(user),
            ClickOutcome::Close => self.close(user),
            ClickOutcome::Navigate(menu) => self.open(user, menu).map(|_| ()),
        }
    }

    /// Handles a host-initiated dismissal (e.g. the user pressed escape).
    /// Removes the session and runs its cleanup hook; a dismissal carrying
    /// a stale grid id is ignored.
    pub fn handle_dismiss(&self, event: &DismissEvent) -> Result<()> {
        if let Some(session) = self.registry.remove_matching(&event.user, event.grid_id) {
            run_handler_impl(|| session.menu().on_close(&event.user), "on_close")?;
            log::info!("Grid {:?} dismissed by {}", event.grid_id, event.user);
        }
        Ok(())
    }
}
