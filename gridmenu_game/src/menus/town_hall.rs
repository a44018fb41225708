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
use gridmenu_core::entry::{presets, ItemEntryBuilder, ItemKind};
use gridmenu_core::notice::Notice;
use gridmenu_core::user::UserId;
use gridmenu_server::menu_state::menu::{ClickOutcome, Menu, MenuView};

use super::{filler_entry, kinds};
use crate::directory::KingdomDirectory;
use crate::settings::MenuSettings;

/// Administration menu for a kingdom with a constructed town hall. The
/// dispatcher guards construction: this menu assumes membership and the
/// hall itself have already been checked.
pub struct TownHallMenu {
    kingdom: String,
    directory: Arc<dyn KingdomDirectory>,
    settings: MenuSettings,
}

impl TownHallMenu {
    /// Slot of the census report entry.
    pub const CENSUS_SLOT: usize = 11;
    /// Slot of the decree entry.
    pub const DECREE_SLOT: usize = 15;
    /// Slot of the close button.
    pub const CLOSE_SLOT: usize = 22;

    pub fn new(
        kingdom: String,
        directory: Arc<dyn KingdomDirectory>,
        settings: MenuSettings,
    ) -> TownHallMenu {
        TownHallMenu {
            kingdom,
            directory,
            settings,
        }
    }

    fn layout(&self, view: &mut MenuView<'_>) -> Result<()> {
        let kingdom = self.kingdom.clone();
        let directory = self.directory.clone();
        view.set_item_with_handler(
            Self::CENSUS_SLOT,
            ItemEntryBuilder::new(ItemKind::new(kinds::TREASURY_LEDGER))
                .display_name("Census")
                .push_description_line("Click for a population report")
                .hide_all_metadata()
                .build(),
            move |ctx| {
                let members = directory
                    .kingdoms()
                    .into_iter()
                    .find(|k| k.name == kingdom)
                    .map(|k| k.member_count)
                    .unwrap_or(0);
                ctx.notify(&Notice::new(
                    "townhall.census",
                    format!("{} counts {} members.", kingdom, members),
                ))?;
                Ok(ClickOutcome::None)
            },
        )?;

        let kingdom = self.kingdom.clone();
        view.set_item_with_handler(
            Self::DECREE_SLOT,
            ItemEntryBuilder::new(ItemKind::new(kinds::DECREE_SCROLL))
                .display_name("Issue Decree")
                .push_description_line("Reserved for the ruling council")
                .hide_all_metadata()
                .build(),
            move |ctx| {
                ctx.notify(&Notice::warning(
                    "townhall.decree_denied",
                    format!("Only the council of {} may issue decrees.", kingdom),
                ))?;
                Ok(ClickOutcome::None)
            },
        )?;

        view.set_item_with_handler(Self::CLOSE_SLOT, presets::close_button(), |_| {
            Ok(ClickOutcome::Close)
        })?;
        view.fill_empty(&filler_entry(&self.settings));
        Ok(())
    }
}

impl Menu for TownHallMenu {
    fn title(&self) -> String {
        format!("Town Hall of {}", self.kingdom)
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

    fn on_close(&self, user: &UserId) -> Result<()> {
        log::debug!("{} left the town hall of {}", user, self.kingdom);
        Ok(())
    }
}
