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
use crate::directory::{KingdomDirectory, KingdomSummary};
use crate::settings::MenuSettings;

/// Paged, optionally filtered listing of every kingdom. Each page is its
/// own menu value; the paging arrows navigate to a sibling with the page
/// number shifted, so there is no mutable paging state to go stale.
pub struct KingdomBrowserMenu {
    user: UserId,
    directory: Arc<dyn KingdomDirectory>,
    settings: MenuSettings,
    filter: Option<String>,
    page: usize,
}

impl KingdomBrowserMenu {
    pub fn new(
        user: UserId,
        directory: Arc<dyn KingdomDirectory>,
        settings: MenuSettings,
        filter: Option<String>,
    ) -> KingdomBrowserMenu {
        KingdomBrowserMenu {
            user,
            directory,
            settings,
            filter,
            page: 0,
        }
    }

    fn with_page(&self, page: usize) -> KingdomBrowserMenu {
        KingdomBrowserMenu {
            user: self.user.clone(),
            directory: self.directory.clone(),
            settings: self.settings.clone(),
            filter: self.filter.clone(),
            page,
        }
    }

    fn rows(&self) -> u32 {
        self.settings.browser_rows.clamp(2, 6)
    }

    /// Slots available for listings; the last row is reserved for controls.
    fn listing_capacity(&self) -> usize {
        ((self.rows() - 1) * STANDARD_COLUMNS) as usize
    }

    fn control_row(&self) -> usize {
        self.listing_capacity()
    }

    /// Slot of the previous-page arrow, when one is shown.
    pub fn previous_slot(&self) -> usize {
        self.control_row()
    }

    /// Slot of the back-to-main button.
    pub fn back_slot(&self) -> usize {
        self.control_row() + 3
    }

    /// Slot of the close button.
    pub fn close_slot(&self) -> usize {
        self.control_row() + 5
    }

    /// Slot of the next-page arrow, when one is shown.
    pub fn next_slot(&self) -> usize {
        self.control_row() + 8
    }

    fn matching(&self) -> Vec<KingdomSummary> {
        let mut kingdoms = self.directory.kingdoms();
        if let Some(filter) = &self.filter {
            let needle = filter.to_ascii_lowercase();
            kingdoms.retain(|k| k.name.to_ascii_lowercase().contains(&needle));
        }
        kingdoms.sort_by(|a, b| a.name.cmp(&b.name));
        kingdoms
    }

    fn layout(&self, view: &mut MenuView<'_>) -> Result<()> {
        let matching = self.matching();
        let capacity = self.listing_capacity();
        let pages = matching.len().div_ceil(capacity).max(1);
        let page = self.page.min(pages - 1);

        for (slot, kingdom) in matching
            .iter()
            .skip(page * capacity)
            .take(capacity)
            .enumerate()
        {
            view.set_item(slot, kingdom_entry(kingdom))?;
        }

        if page > 0 {
            let previous: Arc<dyn Menu> = Arc::new(self.with_page(page - 1));
            view.set_item_with_handler(
                self.previous_slot(),
                presets::previous_page_button(),
                move |_| Ok(ClickOutcome::Navigate(previous.clone())),
            )?;
        }
        if page + 1 < pages {
            let next: Arc<dyn Menu> = Arc::new(self.with_page(page + 1));
            view.set_item_with_handler(self.next_slot(), presets::next_page_button(), move |_| {
                Ok(ClickOutcome::Navigate(next.clone()))
            })?;
        }

        let user = self.user.clone();
        let directory = self.directory.clone();
        let settings = self.settings.clone();
        view.set_item_with_handler(self.back_slot(), presets::back_button(), move |_| {
            Ok(ClickOutcome::Navigate(Arc::new(MainMenu::new(
                user.clone(),
                directory.clone(),
                settings.clone(),
            ))))
        })?;
        view.set_item_with_handler(self.close_slot(), presets::close_button(), |_| {
            Ok(ClickOutcome::Close)
        })?;
        view.fill_empty(&filler_entry(&self.settings));
        Ok(())
    }
}

fn kingdom_entry(kingdom: &KingdomSummary) -> ItemEntry {
    let mut builder = ItemEntryBuilder::new(ItemKind::new(kinds::KINGDOM_BANNER))
        .display_name(kingdom.name.clone())
        .push_description_line(format!("{} members", kingdom.member_count))
        .hide_all_metadata();
    builder = if kingdom.has_town_hall {
        builder
            .push_description_line("Town hall constructed")
            .flag(DecorationFlags::GLOW)
    } else {
        builder.push_description_line("No town hall")
    };
    builder.build()
}

impl Menu for KingdomBrowserMenu {
    fn title(&self) -> String {
        match &self.filter {
            Some(filter) => format!("Kingdoms matching \"{}\"", filter),
            None => "Kingdom Browser".to_string(),
        }
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.rows(), STANDARD_COLUMNS)
    }

    fn initialize_items(&self, view: &mut MenuView<'_>) -> Result<()> {
        self.layout(view)
    }

    fn refresh(&self, view: &mut MenuView<'_>) -> Result<()> {
        view.clear();
        self.layout(view)
    }
}
