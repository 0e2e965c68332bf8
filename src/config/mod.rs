//! Settings persistence for the taskbar ordering
//!
//! One line of a plain-text per-user settings file is recognized:
//! `order="Name"=on,...,`. Loading is never fatal: a missing file, a
//! missing order line, and a malformed order value all degrade to
//! defaults or a partial parse rather than an error. Saving serializes
//! the live panel's child list, since the panel is ground truth for
//! what was actually applied.

mod order_line;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::catalog::{TaskbarItem, default_order, sort_by_target_index};
use crate::constants::order::UNSEEN_INDEX_OFFSET;
use crate::sync::Panel;
use self::order_line::{LineScanner, is_order_line, line_key, parse_order_pairs, write_order_line};

/// Per-user settings file path.
pub fn config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(crate::constants::config::APP_DIR);
    path.push(crate::constants::config::FILENAME);
    path
}

/// Load the canonical order from the default settings path.
pub fn load() -> Vec<TaskbarItem> {
    load_from(&config_path())
}

/// Load the canonical order from an explicit path. A missing or
/// unreadable file yields the default catalog with everything enabled.
pub fn load_from(path: &Path) -> Vec<TaskbarItem> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let order = parse_settings(&contents);
            info!(path = %path.display(), items = order.len(), "Loaded taskbar order");
            order
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No settings file, using default order");
            reconcile(Vec::new(), false)
        }
    }
}

/// Parse settings file contents into a reconciled canonical order.
pub(crate) fn parse_settings(contents: &str) -> Vec<TaskbarItem> {
    let mut file_order = Vec::new();
    let mut found_order_line = false;
    for line in contents.lines() {
        let mut scanner = LineScanner::new(line);
        if is_order_line(line_key(&mut scanner)) {
            found_order_line = true;
            parse_order_pairs(&mut scanner, &mut file_order);
        }
    }
    reconcile(file_order, found_order_line)
}

/// Merge a parsed file order into the default catalog.
///
/// Catalog items named by the file take their enabled flag and target
/// index from it. Items the file never mentioned keep catalog order far
/// behind the explicit ones, and default to enabled only when no order
/// line existed at all; if the user saved an order that omits an item,
/// the omission means disabled. This keeps a newly introduced catalog
/// item from silently reshuffling an older saved arrangement. Parsed
/// spacers become entries of their own.
pub(crate) fn reconcile(file_order: Vec<TaskbarItem>, found_order_line: bool) -> Vec<TaskbarItem> {
    let mut order = default_order();
    for item in &mut order {
        match file_order.iter().find(|parsed| parsed.name == item.name) {
            Some(parsed) => {
                item.enabled = parsed.enabled;
                item.target_index = parsed.target_index;
            }
            None => {
                item.enabled = !found_order_line;
                item.target_index += UNSEEN_INDEX_OFFSET;
            }
        }
    }
    for spacer in file_order.into_iter().filter(TaskbarItem::is_spacer) {
        order.push(spacer);
    }
    sort_by_target_index(&mut order);
    order
}

/// Save the live panel's current order to the default settings path.
pub fn save(panel: Option<&impl Panel>, bluetooth_enabled: bool) -> Result<()> {
    save_to(&config_path(), panel, bluetooth_enabled)
}

/// Save to an explicit path. Without a live panel there is no applied
/// order to record, so only the bare order key is written.
pub fn save_to(path: &Path, panel: Option<&impl Panel>, bluetooth_enabled: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .context(format!("Failed to create config directory: {}", parent.display()))?;
    }
    let mut contents = match panel {
        Some(panel) => {
            let mut line = write_order_line(&panel.children(), bluetooth_enabled);
            line.push('\n');
            line
        }
        None => String::from("order="),
    };
    contents.push('\n');
    fs::write(path, &contents)
        .context(format!("Failed to write settings file to {}", path.display()))?;
    info!(path = %path.display(), "Saved taskbar order");
    Ok(())
}
