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

pub mod kingdom;
pub mod main_menu;
pub mod profession;
pub mod town_hall;

use gridmenu_core::entry::{presets, ItemEntry, ItemKind};

use crate::settings::MenuSettings;

/// Item kinds the built-in menus draw with. Hosts map these to visuals the
/// same way they map any other kind.
pub mod kinds {
    pub const PROFESSION_BADGE: &str = "default:tome";
    pub const KINGDOM_BANNER: &str = "default:banner";
    pub const BROWSER_COMPASS: &str = "default:compass";
    pub const TREASURY_LEDGER: &str = "default:gold_ingot";
    pub const DECREE_SCROLL: &str = "default:scroll";
    pub const UNKNOWN: &str = "decor:barrier";
}

pub(crate) fn filler_entry(settings: &MenuSettings) -> ItemEntry {
    presets::filler(ItemKind::new(settings.filler_kind.as_str()))
}
