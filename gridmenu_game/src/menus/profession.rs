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
use gridmenu_core::entry::{presets, DecorationFlags, ItemEntry, ItemEntryBuilder, ItemKind};
use gridmenu_core::user::UserId;
use gridmenu_server::menu_state::menu::{ClickOutcome, Menu, MenuView};

use super::main_menu::MainMenu;
use super::{filler_entry, kinds};
use crate::directory::{KingdomDirectory, ProfessionProgress};
use crate::settings::MenuSettings;

/// Detail view of one profession. The profession is looked up live at each
/// open/refresh, so progress earned while the menu is open shows up on
/// refresh without reopening.
pub struct ProfessionDetailsMenu {
    user: UserId,
    profession: String,
    directory: Arc<dyn KingdomDirectory>,
    settings: MenuSettings,
}

impl ProfessionDetailsMenu {
    /// Slot of the progress entry, center of the middle row.
    pub const INFO_SLOT: usize = 13;
    /// Slot of the back button, bottom-left corner.
    pub const BACK_SLOT: usize = 18;
    /// Slot of the close button, bottom-right corner.
    pub const CLOSE_SLOT: usize = 26;

    pub fn new(
        user: UserId,
        profession: String,
        directory: Arc<dyn KingdomDirectory>,
        settings: MenuSettings,
    ) -> ProfessionDetailsMenu {
        ProfessionDetailsMenu {
            user,
            profession,
            directory,
            settings,
        }
    }

    fn layout(&self, view: &mut MenuView<'_>) -> Result<()> {
        let info = match self.directory.profession(&self.user, &self.profession) {
            Some(progress) => progress_entry(&progress),
            None => ItemEntryBuilder::new(ItemKind::new(kinds::UNKNOWN))
                .display_name(self.profession.clone())
                .push_description_line("No longer practiced")
                .hide_all_metadata()
                .build(),
        };
        view.set_item(Self::INFO_SLOT, info)?;

        let user = self.user.clone();
        let directory = self.directory.clone();
        let settings = self.settings.clone();
        view.set_item_with_handler(Self::BACK_SLOT, presets::back_button(), move |_| {
            Ok(ClickOutcome::Navigate(Arc::new(MainMenu::new(
                user.clone(),
                directory.clone(),
                settings.clone(),
            ))))
        })?;
        view.set_item_with_handler(Self::CLOSE_SLOT, presets::close_button(), |_| {
            Ok(ClickOutcome::Close)
        })?;
        view.fill_empty(&filler_entry(&self.settings));
        Ok(())
    }
}

fn progress_entry(progress: &ProfessionProgress) -> ItemEntry {
    let mut builder = ItemEntryBuilder::new(ItemKind::new(kinds::PROFESSION_BADGE))
        .display_name(progress.name.clone())
        .push_description_line(format!("Level {}", progress.level))
        .push_description_line(format!(
            "Experience: {} / {}",
            progress.experience, progress.next_level_at
        ))
        .hide_all_metadata();
    if progress.experience >= progress.next_level_at {
        builder = builder
            .flag(DecorationFlags::GLOW)
            .push_description_line("Ready to advance!");
    }
    builder.build()
}

impl Menu for ProfessionDetailsMenu {
    fn title(&self) -> String {
        format!("Profession: {}", self.profession)
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
