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
use gridmenu_core::constants::STANDARD_COLUMNS;
use gridmenu_core::entry::{presets, ItemEntry, ItemEntryBuilder, ItemKind};
use gridmenu_core::user::UserId;
use gridmenu_server::menu_state::menu::{ClickOutcome, Menu, MenuView};

use super::kingdom::KingdomBrowserMenu;
use super::profession::ProfessionDetailsMenu;
use super::{filler_entry, kinds};
use crate::directory::{KingdomDirectory, ProfessionProgress};
use crate::settings::MenuSettings;

/// The landing menu: the user's professions across the top row, plus
/// navigation into the kingdom browser. Re-reads the directory on every
/// open and refresh, so it always reflects current domain state.
pub struct MainMenu {
    user: UserId,
    directory: Arc<dyn KingdomDirectory>,
    settings: MenuSettings,
}

impl MainMenu {
    /// Slot of the kingdom-browser button, on the bottom row.
    pub const KINGDOMS_SLOT: usize = 20;
    /// Slot of the close button, on the bottom row.
    pub const CLOSE_SLOT: usize = 24;

    pub fn new(
        user: UserId,
        directory: Arc<dyn KingdomDirectory>,
        settings: MenuSettings,
    ) -> MainMenu {
        MainMenu {
            user,
            directory,
            settings,
        }
    }

    fn layout(&self, view: &mut MenuView<'_>) -> Result<()> {
        let professions = self.directory.professions(&self.user);
        for (slot, progress) in professions
            .iter()
            .take(STANDARD_COLUMNS as usize)
            .enumerate()
        {
            let user = self.user.clone();
            let directory = self.directory.clone();
            let settings = self.settings.clone();
            let name = progress.name.clone();
            view.set_item_with_handler(slot, profession_entry(progress), move |_| {
                Ok(ClickOutcome::Navigate(Arc::new(
                    ProfessionDetailsMenu::new(
                        user.clone(),
                        name.clone(),
                        directory.clone(),
                        settings.clone(),
                    ),
                )))
            })?;
        }

        let user = self.user.clone();
        let directory = self.directory.clone();
        let settings = self.settings.clone();
        view.set_item_with_handler(
            Self::KINGDOMS_SLOT,
            ItemEntryBuilder::new(ItemKind::new(kinds::BROWSER_COMPASS))
                .display_name("Kingdom Browser")
                .push_description_line("Browse every kingdom in the realm")
                .hide_all_metadata()
                .build(),
            move |_| {
                Ok(ClickOutcome::Navigate(Arc::new(KingdomBrowserMenu::new(
                    user.clone(),
                    directory.clone(),
                    settings.clone(),
                    None,
                ))))
            },
        )?;
        view.set_item_with_handler(Self::CLOSE_SLOT, presets::close_button(), |_| {
            Ok(ClickOutcome::Close)
        })?;
        view.fill_empty(&filler_entry(&self.settings));
        Ok(())
    }
}

fn profession_entry(progress: &ProfessionProgress) -> ItemEntry {
    ItemEntryBuilder::new(ItemKind::new(kinds::PROFESSION_BADGE))
        .display_name(progress.name.clone())
        .push_description_line(format!("Level {}", progress.level))
        .push_description_line("Click for details")
        .hide_all_metadata()
        .build()
}

impl Menu for MainMenu {
    fn title(&self) -> String {
        "Main Menu".to_string()
    }

    fn dimensions(&self) -> (u32, u32) {
        (3, STANDARD_COLUMNS)
    }

    fn initialize_items(&self, view: &mut MenuView<'_>) -> Result<()> {
        self.layout(view)
    }

    fn refresh(&self, view: &mut MenuView<'_>) -> Result<()> {
        view.clear();
        self.layout(view)
    }
}
