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

use std::fmt::Display;
use std::str::FromStr;

use anyhow::bail;
use bitflags::bitflags;
use smallvec::SmallVec;

use crate::constants::MAX_STACK;

/// Namespaced name of a displayable item kind, e.g. `default:iron_sword`.
/// The host maps kinds to whatever visuals it renders; this layer treats
/// them as opaque.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemKind(String);

impl ItemKind {
    pub fn new(name: impl Into<String>) -> ItemKind {
        ItemKind(name.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, name)) if !namespace.is_empty() && !name.is_empty() => {
                Ok(ItemKind(s.to_string()))
            }
            _ => bail!("Item kind {s:?} is not of the form namespace:name"),
        }
    }
}

impl From<&str> for ItemKind {
    fn from(name: &str) -> Self {
        ItemKind(name.to_string())
    }
}

bitflags! {
    /// Presentation toggles on a grid entry. The host decides how each one
    /// is rendered; unset flags mean default presentation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DecorationFlags: u32 {
        /// Suppress the attribute/stat lines under the entry.
        const HIDE_ATTRIBUTES = 1 << 0;
        /// Suppress enchantment/augment lines.
        const HIDE_ENCHANTS = 1 << 1;
        /// Suppress any other host-generated metadata lines.
        const HIDE_EXTRA_INFO = 1 << 2;
        /// Draw the entry with an enchanted-style glow.
        const GLOW = 1 << 3;
    }
}

impl DecorationFlags {
    /// Every hide-toggle at once; the glow is left alone.
    pub fn hide_all_metadata() -> DecorationFlags {
        DecorationFlags::HIDE_ATTRIBUTES
            | DecorationFlags::HIDE_ENCHANTS
            | DecorationFlags::HIDE_EXTRA_INFO
    }
}

type DescriptionLines = SmallVec<[String; 4]>;

/// A decorated entry occupying one slot of a menu grid. Immutable once
/// built; identity is structural.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemEntry {
    kind: ItemKind,
    quantity: u32,
    display_name: Option<String>,
    description: DescriptionLines,
    flags: DecorationFlags,
}

impl ItemEntry {
    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// The display name override, if any. `None` means the host shows the
    /// kind's default name.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn description(&self) -> &[String] {
        &self.description
    }

    pub fn flags(&self) -> DecorationFlags {
        self.flags
    }
}

/// Fluent constructor for [ItemEntry]. Every setter consumes and returns the
/// builder; `build()` freezes the result.
///
/// ```
/// use gridmenu_core::entry::{DecorationFlags, ItemEntryBuilder, ItemKind};
///
/// let entry = ItemEntryBuilder::new(ItemKind::new("default:iron_sword"))
///     .quantity(3)
///     .display_name("Vault Blade")
///     .push_description_line("Click to equip")
///     .flag(DecorationFlags::GLOW)
///     .build();
/// assert_eq!(entry.quantity(), 3);
/// ```
pub struct ItemEntryBuilder {
    kind: ItemKind,
    quantity: u32,
    display_name: Option<String>,
    description: DescriptionLines,
    flags: DecorationFlags,
}

impl ItemEntryBuilder {
    pub fn new(kind: ItemKind) -> ItemEntryBuilder {
        ItemEntryBuilder {
            kind,
            quantity: 1,
            display_name: None,
            description: SmallVec::new(),
            flags: DecorationFlags::empty(),
        }
    }

    /// Sets the displayed quantity, clamped into [1, [MAX_STACK]].
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.clamp(1, MAX_STACK);
        self
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Replaces the whole description with the given lines. Prior lines,
    /// including any added with [Self::push_description_line], are lost.
    pub fn description<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.description = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one line to the description, preserving prior lines.
    pub fn push_description_line(mut self, line: impl Into<String>) -> Self {
        self.description.push(line.into());
        self
    }

    pub fn flag(mut self, flag: DecorationFlags) -> Self {
        self.flags |= flag;
        self
    }

    /// Turns on every metadata-hiding flag, as used by decorative entries.
    pub fn hide_all_metadata(mut self) -> Self {
        self.flags |= DecorationFlags::hide_all_metadata();
        self
    }

    pub fn build(self) -> ItemEntry {
        ItemEntry {
            kind: self.kind,
            quantity: self.quantity,
            display_name: self.display_name,
            description: self.description,
            flags: self.flags,
        }
    }
}

/// Ready-made decorative entries for the common chrome of a menu: fillers,
/// paging arrows, back and close buttons.
pub mod presets {
    use super::{ItemEntry, ItemEntryBuilder, ItemKind};
    use crate::constants::decor;

    /// An inert filler pane of the given kind, typically passed to
    /// `fill_empty`.
    pub fn filler(kind: ItemKind) -> ItemEntry {
        ItemEntryBuilder::new(kind)
            .display_name(" ")
            .hide_all_metadata()
            .build()
    }

    pub fn back_button() -> ItemEntry {
        ItemEntryBuilder::new(ItemKind::new(decor::ARROW_LEFT))
            .display_name("Back")
            .hide_all_metadata()
            .build()
    }

    pub fn previous_page_button() -> ItemEntry {
        ItemEntryBuilder::new(ItemKind::new(decor::ARROW_LEFT))
            .display_name("Previous page")
            .hide_all_metadata()
            .build()
    }

    pub fn next_page_button() -> ItemEntry {
        ItemEntryBuilder::new(ItemKind::new(decor::ARROW_RIGHT))
            .display_name("Next page")
            .hide_all_metadata()
            .build()
    }

    pub fn close_button() -> ItemEntry {
        ItemEntryBuilder::new(ItemKind::new(decor::BARRIER))
            .display_name("Close")
            .hide_all_metadata()
            .build()
    }
}
