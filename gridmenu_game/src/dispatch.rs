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
use std::sync::Arc;

use anyhow::{bail, Result};
use gridmenu_core::error::MenuError;
use gridmenu_core::notice::Notice;
use gridmenu_core::user::UserId;
use gridmenu_server::menu_state::MenuManager;
use itertools::Itertools;

use crate::directory::KingdomDirectory;
use crate::menus::kingdom::KingdomBrowserMenu;
use crate::menus::main_menu::MainMenu;
use crate::menus::profession::ProfessionDetailsMenu;
use crate::menus::town_hall::TownHallMenu;
use crate::settings::MenuSettings;

/// Everything an intent handler needs to construct and open its menu.
pub struct IntentContext<'a> {
    pub user: &'a UserId,
    /// Free-form argument of the intent, e.g. a profession name or a
    /// browser filter.
    pub arg: Option<&'a str>,
    pub manager: &'a Arc<MenuManager>,
    pub directory: &'a Arc<dyn KingdomDirectory>,
    pub settings: &'a MenuSettings,
}

pub trait MenuIntentHandler: Send + Sync {
    fn open(&self, ctx: &IntentContext<'_>) -> Result<()>;
}

pub struct MenuIntent {
    action: Box<dyn MenuIntentHandler>,
    /// Help text. E.g. for an intent taking an argument, the help text
    /// should be `"<profession>: Opens the details view."`
    help_text: String,
}

impl MenuIntent {
    pub fn new(action: Box<dyn MenuIntentHandler>, help_text: impl Into<String>) -> MenuIntent {
        MenuIntent {
            action,
            help_text: help_text.into(),
        }
    }
}

/// Routes named menu intents to concrete menus. This is the seam between
/// the menu engine and the game's domain: guard logic (memberships,
/// constructed facilities) lives in the intent handlers registered here,
/// never in the engine.
pub struct MenuDispatcher {
    intents: HashMap<String, MenuIntent>,
    manager: Arc<MenuManager>,
    directory: Arc<dyn KingdomDirectory>,
    settings: MenuSettings,
}

impl MenuDispatcher {
    pub fn new(
        manager: Arc<MenuManager>,
        directory: Arc<dyn KingdomDirectory>,
        settings: MenuSettings,
    ) -> Result<MenuDispatcher> {
        let mut dispatcher = MenuDispatcher {
            intents: HashMap::new(),
            manager,
            directory,
            settings,
        };
        register_default_intents(&mut dispatcher)?;
        Ok(dispatcher)
    }

    pub fn add_intent(&mut self, name: impl Into<String>, intent: MenuIntent) -> Result<()> {
        let name = name.into();
        if self.intents.contains_key(&name) {
            return Err(MenuError::DuplicateIntent(name).into());
        }
        self.intents.insert(name, intent);
        Ok(())
    }

    /// Opens the menu for an intent, reporting failures to the user as a
    /// notice rather than propagating them.
    pub fn open_intent(&self, name: &str, user: &UserId, arg: Option<&str>) -> Result<()> {
        if let Err(e) = self.try_open_intent(name, user, arg) {
            self.manager.presenter().send_notice(
                user,
                &Notice::error("menu.open_failed", format!("Could not open menu: {:#}", e)),
            )?;
        }
        Ok(())
    }

    /// Opens the menu for an intent, returning an error if it fails.
    pub fn try_open_intent(&self, name: &str, user: &UserId, arg: Option<&str>) -> Result<()> {
        let Some(intent) = self.intents.get(name) else {
            bail!("Intent {name} not found");
        };
        let ctx = IntentContext {
            user,
            arg,
            manager: &self.manager,
            directory: &self.directory,
            settings: &self.settings,
        };
        intent.action.open(&ctx)
    }

    /// One line per registered intent, sorted by name.
    pub fn intent_help(&self) -> String {
        self.intents
            .iter()
            .sorted_by(|(k, _v), (k2, _v2)| k.cmp(k2))
            .map(|(name, intent)| format!("{} {}", name, intent.help_text))
            .join("\n")
    }

    pub fn manager(&self) -> &Arc<MenuManager> {
        &self.manager
    }
}

fn register_default_intents(dispatcher: &mut MenuDispatcher) -> Result<()> {
    dispatcher.add_intent(
        "main",
        MenuIntent::new(Box::new(MainMenuIntent), ": Opens the main menu."),
    )?;
    dispatcher.add_intent(
        "profession",
        MenuIntent::new(
            Box::new(ProfessionIntent),
            "<profession>: Opens the details view for one of your professions.",
        ),
    )?;
    dispatcher.add_intent(
        "kingdoms",
        MenuIntent::new(
            Box::new(KingdomBrowserIntent),
            "[filter]: Browses all kingdoms, optionally filtered by name.",
        ),
    )?;
    dispatcher.add_intent(
        "town_hall",
        MenuIntent::new(
            Box::new(TownHallIntent),
            ": Opens your kingdom's town hall. Requires membership and a constructed hall.",
        ),
    )?;
    Ok(())
}

struct MainMenuIntent;
impl MenuIntentHandler for MainMenuIntent {
    fn open(&self, ctx: &IntentContext<'_>) -> Result<()> {
        let menu = MainMenu::new(
            ctx.user.clone(),
            ctx.directory.clone(),
            ctx.settings.clone(),
        );
        ctx.manager.open(ctx.user, Arc::new(menu)).map(|_| ())
    }
}

struct ProfessionIntent;
impl MenuIntentHandler for ProfessionIntent {
    fn open(&self, ctx: &IntentContext<'_>) -> Result<()> {
        let name = match ctx.arg {
            Some(name) if !name.trim().is_empty() => name.trim(),
            _ => bail!("Expected a profession name"),
        };
        let menu = ProfessionDetailsMenu::new(
            ctx.user.clone(),
            name.to_string(),
            ctx.directory.clone(),
            ctx.settings.clone(),
        );
        ctx.manager.open(ctx.user, Arc::new(menu)).map(|_| ())
    }
}

struct KingdomBrowserIntent;
impl MenuIntentHandler for KingdomBrowserIntent {
    fn open(&self, ctx: &IntentContext<'_>) -> Result<()> {
        let filter = ctx
            .arg
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string);
        let menu = KingdomBrowserMenu::new(
            ctx.user.clone(),
            ctx.directory.clone(),
            ctx.settings.clone(),
            filter,
        );
        ctx.manager.open(ctx.user, Arc::new(menu)).map(|_| ())
    }
}

/// Opening the town hall requires kingdom membership and a constructed
/// hall. On either failure the user gets a notice and no session is
/// created.
struct TownHallIntent;
impl MenuIntentHandler for TownHallIntent {
    fn open(&self, ctx: &IntentContext<'_>) -> Result<()> {
        let Some(kingdom) = ctx.directory.membership(ctx.user) else {
            ctx.manager.presenter().send_notice(
                ctx.user,
                &Notice::error(
                    "townhall.no_kingdom",
                    "You are not a member of any kingdom.",
                ),
            )?;
            return Ok(());
        };
        if !ctx.directory.has_town_hall(&kingdom) {
            ctx.manager.presenter().send_notice(
                ctx.user,
                &Notice::error(
                    "townhall.not_built",
                    format!("{} has not constructed a town hall yet.", kingdom),
                ),
            )?;
            return Ok(());
        }
        let menu = TownHallMenu::new(kingdom, ctx.directory.clone(), ctx.settings.clone());
        ctx.manager.open(ctx.user, Arc::new(menu)).map(|_| ())
    }
}
