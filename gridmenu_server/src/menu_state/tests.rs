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

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use anyhow::Result;
use gridmenu_core::constants::decor;
use gridmenu_core::entry::{presets, ItemEntry, ItemEntryBuilder, ItemKind};
use gridmenu_core::user::UserId;
use parking_lot::Mutex;

use super::event::{DismissEvent, InteractionDisposition, InteractionEvent, InteractionKind};
use super::menu::{ClickOutcome, Menu, MenuView};
use super::registry::MenuRegistry;
use super::session::GridId;
use super::MenuManager;
use crate::presenter::{PresenterCall, RecordingPresenter};

struct Harness {
    registry: Arc<MenuRegistry>,
    presenter: Arc<RecordingPresenter>,
    manager: Arc<MenuManager>,
}

fn make_harness() -> Harness {
    let registry = Arc::new(MenuRegistry::new());
    let presenter = Arc::new(RecordingPresenter::new());
    let manager = MenuManager::new(registry.clone(), presenter.clone());
    Harness {
        registry,
        presenter,
        manager,
    }
}

fn entry(kind: &str) -> ItemEntry {
    ItemEntryBuilder::new(ItemKind::new(kind)).build()
}

fn click(
    user: &UserId,
    grid_id: GridId,
    slot: usize,
    clicked: Option<ItemEntry>,
) -> InteractionEvent {
    InteractionEvent {
        user: user.clone(),
        grid_id,
        slot,
        kind: InteractionKind::LeftClick,
        clicked,
    }
}

type Observations = Arc<Mutex<Vec<(InteractionKind, Option<ItemEntry>)>>>;

/// 54-slot menu with one handled slot (10), recording every invocation.
struct ClickTestMenu {
    item: ItemEntry,
    observed: Observations,
    closed: Arc<AtomicU32>,
}

impl ClickTestMenu {
    fn new(item: ItemEntry) -> Arc<ClickTestMenu> {
        Arc::new(ClickTestMenu {
            item,
            observed: Arc::new(Mutex::new(vec![])),
            closed: Arc::new(AtomicU32::new(0)),
        })
    }
}

impl Menu for ClickTestMenu {
    fn title(&self) -> String {
        "Click test".to_string()
    }

    fn dimensions(&self) -> (u32, u32) {
        (6, 9)
    }

    fn initialize_items(&self, view: &mut MenuView<'_>) -> Result<()> {
        let observed = self.observed.clone();
        view.set_item_with_handler(10, self.item.clone(), move |ctx| {
            observed.lock().push((ctx.kind(), ctx.clicked().cloned()));
            Ok(ClickOutcome::None)
        })
    }

    fn refresh(&self, _view: &mut MenuView<'_>) -> Result<()> {
        Ok(())
    }

    fn on_close(&self, _user: &UserId) -> Result<()> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn open_then_close_removes_registry_entry() {
    let h = make_harness();
    let alice = UserId::new("alice");
    let menu = ClickTestMenu::new(entry("test:sword"));

    h.manager.open(&alice, menu.clone()).unwrap();
    assert!(h.registry.has(&alice));
    assert_eq!(h.registry.open_count(), 1);

    h.manager.close(&alice).unwrap();
    assert!(!h.registry.has(&alice));
    assert_eq!(menu.closed.load(Ordering::SeqCst), 1);

    // Second close is a no-op: nothing new is dismissed or cleaned up.
    h.manager.close(&alice).unwrap();
    assert_eq!(menu.closed.load(Ordering::SeqCst), 1);
    let dismissals = h
        .presenter
        .calls()
        .iter()
        .filter(|c| matches!(c, PresenterCall::DismissGrid { .. }))
        .count();
    assert_eq!(dismissals, 1);
}

#[test]
fn click_routes_to_bound_handler_only() {
    let h = make_harness();
    let alice = UserId::new("alice");
    let item_x = ItemEntryBuilder::new(ItemKind::new("test:gem"))
        .display_name("Gem")
        .build();
    let menu = ClickTestMenu::new(item_x.clone());
    let grid_id = h.manager.open(&alice, menu.clone()).unwrap();

    // Mapped slot: the handler fires with the entry that was set.
    let disposition = h
        .manager
        .handle_interaction(&click(&alice, grid_id, 10, Some(item_x.clone())))
        .unwrap();
    assert_eq!(disposition, InteractionDisposition::Suppress);
    {
        let observed = menu.observed.lock();
        assert_eq!(observed.len(), 1);
        assert_eq!(observed[0].0, InteractionKind::LeftClick);
        assert_eq!(observed[0].1.as_ref(), Some(&item_x));
    }

    // Unmapped slot: no action, but still ours to suppress.
    let disposition = h
        .manager
        .handle_interaction(&click(&alice, grid_id, 11, None))
        .unwrap();
    assert_eq!(disposition, InteractionDisposition::Suppress);
    assert_eq!(menu.observed.lock().len(), 1);

    // A slot beyond the grid is treated the same as unmapped.
    let disposition = h
        .manager
        .handle_interaction(&click(&alice, grid_id, 1000, None))
        .unwrap();
    assert_eq!(disposition, InteractionDisposition::Suppress);
    assert_eq!(menu.observed.lock().len(), 1);
}

#[test]
fn reopen_closes_previous_session_first() {
    let h = make_harness();
    let alice = UserId::new("alice");
    let first = ClickTestMenu::new(entry("test:a"));
    let second = ClickTestMenu::new(entry("test:b"));

    let grid1 = h.manager.open(&alice, first.clone()).unwrap();
    let grid2 = h.manager.open(&alice, second.clone()).unwrap();
    assert_ne!(grid1, grid2);

    assert_eq!(h.registry.open_count(), 1);
    assert_eq!(h.registry.grid_id_for(&alice), Some(grid2));
    assert_eq!(first.closed.load(Ordering::SeqCst), 1);
    assert_eq!(second.closed.load(Ordering::SeqCst), 0);

    // The old grid was dismissed before the new one was shown.
    let calls = h.presenter.calls();
    let relevant: Vec<_> = calls
        .iter()
        .filter_map(|c| match c {
            PresenterCall::ShowGrid { grid_id, .. } => Some(("show", *grid_id)),
            PresenterCall::DismissGrid { grid_id, .. } => Some(("dismiss", *grid_id)),
            _ => None,
        })
        .collect();
    assert_eq!(
        relevant,
        vec![("show", grid1), ("dismiss", grid1), ("show", grid2)]
    );
}

#[test]
fn stale_grid_events_pass_through() {
    let h = make_harness();
    let alice = UserId::new("alice");
    let first = ClickTestMenu::new(entry("test:a"));
    let second = ClickTestMenu::new(entry("test:b"));

    let grid1 = h.manager.open(&alice, first.clone()).unwrap();
    let grid2 = h.manager.open(&alice, second.clone()).unwrap();

    // An event from the replaced grid must not reach either menu's handlers.
    let disposition = h
        .manager
        .handle_interaction(&click(&alice, grid1, 10, None))
        .unwrap();
    assert_eq!(disposition, InteractionDisposition::PassThrough);
    assert!(first.observed.lock().is_empty());
    assert!(second.observed.lock().is_empty());

    // A user with no session at all also passes through.
    let bob = UserId::new("bob");
    let disposition = h
        .manager
        .handle_interaction(&click(&bob, grid2, 10, None))
        .unwrap();
    assert_eq!(disposition, InteractionDisposition::PassThrough);

    // A stale dismissal must not tear down the live session.
    h.manager
        .handle_dismiss(&DismissEvent {
            user: alice.clone(),
            grid_id: grid1,
        })
        .unwrap();
    assert_eq!(h.registry.grid_id_for(&alice), Some(grid2));
    assert_eq!(second.closed.load(Ordering::SeqCst), 0);
}

#[test]
fn dismiss_event_removes_session_and_runs_hook() {
    let h = make_harness();
    let alice = UserId::new("alice");
    let menu = ClickTestMenu::new(entry("test:a"));
    let grid_id = h.manager.open(&alice, menu.clone()).unwrap();

    h.manager
        .handle_dismiss(&DismissEvent {
            user: alice.clone(),
            grid_id,
        })
        .unwrap();
    assert!(!h.registry.has(&alice));
    assert_eq!(menu.closed.load(Ordering::SeqCst), 1);

    // The host already closed the view; we must not ask it to dismiss again.
    let dismissals = h
        .presenter
        .calls()
        .iter()
        .filter(|c| matches!(c, PresenterCall::DismissGrid { .. }))
        .count();
    assert_eq!(dismissals, 0);
}

/// Menu that populates a few slots and fills the rest with a pane.
struct FillTestMenu {
    populated: Vec<usize>,
}

impl Menu for FillTestMenu {
    fn title(&self) -> String {
        "Fill test".to_string()
    }

    fn dimensions(&self) -> (u32, u32) {
        (2, 9)
    }

    fn initialize_items(&self, view: &mut MenuView<'_>) -> Result<()> {
        for &slot in &self.populated {
            view.set_item(slot, entry("test:occupied"))?;
        }
        view.fill_empty(&presets::filler(ItemKind::new(decor::PANE)));
        Ok(())
    }

    fn refresh(&self, _view: &mut MenuView<'_>) -> Result<()> {
        Ok(())
    }
}

#[test]
fn fill_empty_only_touches_empty_slots() {
    let h = make_harness();
    let alice = UserId::new("alice");
    let menu = Arc::new(FillTestMenu {
        populated: vec![0, 5, 17],
    });
    h.manager.open(&alice, menu).unwrap();

    let shown = h.presenter.last_shown_entries(&alice).unwrap();
    let filler = presets::filler(ItemKind::new(decor::PANE));
    for (slot, slot_entry) in shown.iter().enumerate() {
        if [0, 5, 17].contains(&slot) {
            assert_eq!(slot_entry.as_ref(), Some(&entry("test:occupied")));
        } else {
            assert_eq!(slot_entry.as_ref(), Some(&filler));
        }
    }
}

/// Menu whose slot 0 navigates to a target menu and slot 1 closes.
struct NavTestMenu {
    target: Option<Arc<dyn Menu>>,
}

impl Menu for NavTestMenu {
    fn title(&self) -> String {
        "Nav test".to_string()
    }

    fn dimensions(&self) -> (u32, u32) {
        (1, 9)
    }

    fn initialize_items(&self, view: &mut MenuView<'_>) -> Result<()> {
        if let Some(target) = &self.target {
            let target = target.clone();
            view.set_item_with_handler(0, entry("test:door"), move |_| {
                Ok(ClickOutcome::Navigate(target.clone()))
            })?;
        }
        view.set_item_with_handler(1, presets::close_button(), |_| Ok(ClickOutcome::Close))?;
        Ok(())
    }

    fn refresh(&self, _view: &mut MenuView<'_>) -> Result<()> {
        Ok(())
    }
}

#[test]
fn navigate_outcome_swaps_sessions() {
    let h = make_harness();
    let alice = UserId::new("alice");
    let inner = ClickTestMenu::new(entry("test:inner"));
    let outer = Arc::new(NavTestMenu {
        target: Some(inner.clone()),
    });

    let grid1 = h.manager.open(&alice, outer).unwrap();
    let disposition = h
        .manager
        .handle_interaction(&click(&alice, grid1, 0, None))
        .unwrap();
    assert_eq!(disposition, InteractionDisposition::Suppress);

    let grid2 = h.registry.grid_id_for(&alice).unwrap();
    assert_ne!(grid1, grid2);
    // The new session belongs to the inner menu: its handled slot works.
    h.manager
        .handle_interaction(&click(&alice, grid2, 10, None))
        .unwrap();
    assert_eq!(inner.observed.lock().len(), 1);
}

#[test]
fn close_outcome_tears_down_session() {
    let h = make_harness();
    let alice = UserId::new("alice");
    let menu = Arc::new(NavTestMenu { target: None });

    let grid_id = h.manager.open(&alice, menu).unwrap();
    let disposition = h
        .manager
        .handle_interaction(&click(&alice, grid_id, 1, None))
        .unwrap();
    assert_eq!(disposition, InteractionDisposition::Suppress);
    assert!(h.registry.is_empty());
}

/// Menu that redraws itself from a shared counter.
struct CounterMenu {
    counter: Arc<AtomicU32>,
}

impl CounterMenu {
    fn layout(&self, view: &mut MenuView<'_>) -> Result<()> {
        let count = self.counter.load(Ordering::SeqCst);
        view.set_item(
            0,
            ItemEntryBuilder::new(ItemKind::new("test:coin"))
                .quantity(count)
                .build(),
        )?;
        view.set_item(1, entry("test:banner"))?;
        Ok(())
    }
}

impl Menu for CounterMenu {
    fn title(&self) -> String {
        "Counter".to_string()
    }

    fn dimensions(&self) -> (u32, u32) {
        (1, 9)
    }

    fn initialize_items(&self, view: &mut MenuView<'_>) -> Result<()> {
        self.layout(view)
    }

    fn refresh(&self, view: &mut MenuView<'_>) -> Result<()> {
        view.clear();
        self.layout(view)
    }
}

#[test]
fn refresh_pushes_only_changed_slots() {
    let h = make_harness();
    let alice = UserId::new("alice");
    let counter = Arc::new(AtomicU32::new(1));
    let menu = Arc::new(CounterMenu {
        counter: counter.clone(),
    });
    let grid_id = h.manager.open(&alice, menu).unwrap();

    counter.store(5, Ordering::SeqCst);
    h.manager.refresh(&alice).unwrap();

    let updates: Vec<_> = h
        .presenter
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            PresenterCall::UpdateSlot {
                grid_id: g,
                slot,
                entry,
                ..
            } => Some((g, slot, entry)),
            _ => None,
        })
        .collect();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].0, grid_id);
    assert_eq!(updates[0].1, 0);
    assert_eq!(
        updates[0].2,
        Some(
            ItemEntryBuilder::new(ItemKind::new("test:coin"))
                .quantity(5)
                .build()
        )
    );

    // Refresh with nothing open is a no-op.
    h.manager.refresh(&UserId::new("bob")).unwrap();
}

/// Menu that tries to draw outside its own grid.
struct OutOfBoundsMenu;

impl Menu for OutOfBoundsMenu {
    fn title(&self) -> String {
        "Broken".to_string()
    }

    fn dimensions(&self) -> (u32, u32) {
        (1, 9)
    }

    fn initialize_items(&self, view: &mut MenuView<'_>) -> Result<()> {
        view.set_item(100, entry("test:oops"))
    }

    fn refresh(&self, _view: &mut MenuView<'_>) -> Result<()> {
        Ok(())
    }
}

#[test]
fn out_of_bounds_initialize_fails_fast() {
    let h = make_harness();
    let alice = UserId::new("alice");

    let result = h.manager.open(&alice, Arc::new(OutOfBoundsMenu));
    assert!(result.is_err());
    // Nothing was registered and nothing was shown.
    assert!(h.registry.is_empty());
    assert!(h
        .presenter
        .calls()
        .iter()
        .all(|c| !matches!(c, PresenterCall::ShowGrid { .. })));
}

#[test]
fn live_set_item_updates_client_and_rebinds_handler() {
    let h = make_harness();
    let alice = UserId::new("alice");
    let menu = ClickTestMenu::new(entry("test:a"));
    let grid_id = h.manager.open(&alice, menu.clone()).unwrap();

    let late_entry = entry("test:late");
    let late_clicks = Arc::new(AtomicU32::new(0));
    let late_clicks_in_handler = late_clicks.clone();
    h.manager
        .set_item(
            &alice,
            20,
            late_entry.clone(),
            Some(Box::new(move |_| {
                late_clicks_in_handler.fetch_add(1, Ordering::SeqCst);
                Ok(ClickOutcome::None)
            })),
        )
        .unwrap();

    let updates: Vec<_> = h
        .presenter
        .calls()
        .into_iter()
        .filter(|c| matches!(c, PresenterCall::UpdateSlot { slot: 20, .. }))
        .collect();
    assert_eq!(updates.len(), 1);

    h.manager
        .handle_interaction(&click(&alice, grid_id, 20, Some(late_entry)))
        .unwrap();
    assert_eq!(late_clicks.load(Ordering::SeqCst), 1);

    // With no open menu, a live mutation is an error rather than a silent drop.
    h.manager.close(&alice).unwrap();
    assert!(h.manager.set_item(&alice, 0, entry("test:x"), None).is_err());
}

#[test]
fn sessions_are_independent_across_users() {
    let h = make_harness();
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");
    let menu_a = ClickTestMenu::new(entry("test:a"));
    let menu_b = ClickTestMenu::new(entry("test:b"));

    let grid_a = h.manager.open(&alice, menu_a.clone()).unwrap();
    let grid_b = h.manager.open(&bob, menu_b.clone()).unwrap();
    assert_eq!(h.registry.open_count(), 2);
    assert_ne!(grid_a, grid_b);

    h.manager.close(&alice).unwrap();
    assert!(!h.registry.has(&alice));
    assert!(h.registry.has(&bob));
    assert_eq!(menu_b.closed.load(Ordering::SeqCst), 0);
}

// The end-to-end walk from the framework contract: a 54-slot grid with one
// handled slot, an unmapped neighbor, and a host-initiated dismissal.
#[test]
fn full_session_scenario() {
    let h = make_harness();
    let alice = UserId::new("alice");
    let item_x = ItemEntryBuilder::new(ItemKind::new("test:relic"))
        .display_name("Relic")
        .push_description_line("Handle with care")
        .build();
    let menu = ClickTestMenu::new(item_x.clone());

    let grid_id = h.manager.open(&alice, menu.clone()).unwrap();
    assert_eq!(h.registry.open_count(), 1);

    assert_eq!(
        h.manager
            .handle_interaction(&click(&alice, grid_id, 10, Some(item_x.clone())))
            .unwrap(),
        InteractionDisposition::Suppress
    );
    assert_eq!(menu.observed.lock().as_slice(), &[(
        InteractionKind::LeftClick,
        Some(item_x)
    )]);

    assert_eq!(
        h.manager
            .handle_interaction(&click(&alice, grid_id, 11, None))
            .unwrap(),
        InteractionDisposition::Suppress
    );
    assert_eq!(menu.observed.lock().len(), 1);

    h.manager
        .handle_dismiss(&DismissEvent {
            user: alice.clone(),
            grid_id,
        })
        .unwrap();
    assert!(!h.registry.has(&alice));
    assert_eq!(menu.closed.load(Ordering::SeqCst), 1);
}
