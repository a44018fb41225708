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

//! Scripted walkthrough of the built-in menus against a presenter that
//! renders to the log. Run with RUST_LOG=info (the default) or debug.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use gridmenu_core::entry::ItemEntry;
use gridmenu_core::notice::Notice;
use gridmenu_core::user::UserId;
use gridmenu_game::directory::{InMemoryDirectory, KingdomDirectory, KingdomSummary, ProfessionProgress};
use gridmenu_game::dispatch::MenuDispatcher;
use gridmenu_game::menus::main_menu::MainMenu;
use gridmenu_game::menus::profession::ProfessionDetailsMenu;
use gridmenu_game::settings;
use gridmenu_server::menu_state::event::{InteractionEvent, InteractionKind};
use gridmenu_server::menu_state::registry::MenuRegistry;
use gridmenu_server::menu_state::session::GridId;
use gridmenu_server::menu_state::MenuManager;
use gridmenu_server::presenter::MenuPresenter;

/// Presenter that renders grids into the log instead of a client screen.
struct ConsolePresenter;

impl MenuPresenter for ConsolePresenter {
    fn show_grid(
        &self,
        user: &UserId,
        grid_id: GridId,
        title: &str,
        dimensions: (u32, u32),
        entries: &[Option<ItemEntry>],
    ) -> Result<()> {
        log::info!(
            "[{}] === {} ({}x{}, grid {}) ===",
            user,
            title,
            dimensions.0,
            dimensions.1,
            grid_id.as_u64()
        );
        for (slot, entry) in entries.iter().enumerate() {
            if let Some(entry) = entry {
                if let Some(name) = entry.display_name() {
                    if name.trim().is_empty() {
                        continue;
                    }
                    log::info!("[{}]   slot {:2}: {} ({})", user, slot, name, entry.kind());
                }
            }
        }
        Ok(())
    }

    fn dismiss_grid(&self, user: &UserId, grid_id: GridId) -> Result<()> {
        log::info!("[{}] grid {} dismissed", user, grid_id.as_u64());
        Ok(())
    }

    fn update_slot(
        &self,
        user: &UserId,
        grid_id: GridId,
        slot: usize,
        entry: Option<&ItemEntry>,
    ) -> Result<()> {
        log::info!(
            "[{}] grid {} slot {} updated to {:?}",
            user,
            grid_id.as_u64(),
            slot,
            entry.and_then(|e| e.display_name())
        );
        Ok(())
    }

    fn send_notice(&self, user: &UserId, notice: &Notice) -> Result<()> {
        log::info!("[{}] notice <{}>: {}", user, notice.key(), notice.text());
        Ok(())
    }
}

fn seed_directory(directory: &InMemoryDirectory, alice: &UserId) {
    directory.put_kingdom(KingdomSummary {
        name: "Eastvale".to_string(),
        member_count: 12,
        has_town_hall: true,
    });
    directory.put_kingdom(KingdomSummary {
        name: "Westmarch".to_string(),
        member_count: 4,
        has_town_hall: false,
    });
    directory.set_membership(alice.clone(), "Eastvale");
    directory.put_profession(
        alice.clone(),
        ProfessionProgress {
            name: "Blacksmith".to_string(),
            level: 7,
            experience: 450,
            next_level_at: 600,
        },
    );
    directory.put_profession(
        alice.clone(),
        ProfessionProgress {
            name: "Herbalist".to_string(),
            level: 3,
            experience: 90,
            next_level_at: 90,
        },
    );
}

fn left_click(user: &UserId, grid_id: GridId, slot: usize) -> InteractionEvent {
    InteractionEvent {
        user: user.clone(),
        grid_id,
        slot,
        kind: InteractionKind::LeftClick,
        clicked: None,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = settings::load(Path::new("."))?;
    let directory = Arc::new(InMemoryDirectory::new());
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");
    seed_directory(&directory, &alice);

    let registry = Arc::new(MenuRegistry::new());
    let manager = MenuManager::new(registry.clone(), Arc::new(ConsolePresenter));
    let dispatcher = MenuDispatcher::new(
        manager.clone(),
        directory.clone() as Arc<dyn KingdomDirectory>,
        settings,
    )?;

    log::info!("Registered intents:\n{}", dispatcher.intent_help());

    // Alice walks from the main menu into a profession and back out.
    dispatcher.open_intent("main", &alice, None)?;
    let grid = registry.grid_id_for(&alice).unwrap();
    manager.handle_interaction(&left_click(&alice, grid, 0))?;
    let grid = registry.grid_id_for(&alice).unwrap();
    manager.handle_interaction(&left_click(&alice, grid, ProfessionDetailsMenu::BACK_SLOT))?;

    // Then browses the kingdoms.
    let grid = registry.grid_id_for(&alice).unwrap();
    manager.handle_interaction(&left_click(&alice, grid, MainMenu::KINGDOMS_SLOT))?;
    manager.close(&alice)?;

    // The town hall guard admits alice and turns bob away with a notice.
    dispatcher.open_intent("town_hall", &alice, None)?;
    manager.close(&alice)?;
    dispatcher.open_intent("town_hall", &bob, None)?;

    Ok(())
}
