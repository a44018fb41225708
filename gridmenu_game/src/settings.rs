use anyhow::Result;
use gridmenu_core::constants::decor;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct MenuSettings {
    /// Rows in paged browser menus, including the control row.
    /// Clamped into [2, 6] when a menu is laid out.
    pub browser_rows: u32,
    /// Item kind drawn into unused slots.
    pub filler_kind: String,
}

pub const FILENAME: &str = "menus.ron";

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            browser_rows: 6,
            filler_kind: decor::PANE.to_string(),
        }
    }
}

pub fn load(data_dir: &Path) -> Result<MenuSettings> {
    let config_file = data_dir.join(FILENAME);
    if !config_file.exists() {
        log::info!("No menu settings at {}; using defaults", config_file.display());
        return Ok(Default::default());
    }
    let config = ron::from_str::<MenuSettings>(&std::fs::read_to_string(&config_file)?)?;
    log::info!("Loaded menu settings from {}", config_file.display());
    Ok(config)
}
