//! Thin settings-surface state
//!
//! Holds the canonical order plus the process-wide bluetooth intent
//! flag, and exposes the entry points the host UI wires its gestures
//! and clicks to: toggle, drag commit, reset, load and save. The host
//! owns the visual row list and the paint code; this module only hands
//! it row models and consumes the row order back at commit time.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::catalog::{TaskbarItem, default_order, renumber_sequentially};
use crate::config;
use crate::constants::order::{BLUETOOTH_NAME, SPACER_NAME};
use crate::sync::{Panel, merge_order_with_panel};

/// What the host needs to build one visual row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    pub name: String,
    pub enabled: bool,
    /// Spacer rows get a remove action instead of an on/off toggle.
    pub removable: bool,
}

impl RowModel {
    /// A fresh spacer row for the "add spacer" action. Spacers live in
    /// the visual list only; the canonical order picks nothing up until
    /// the next saved file round-trips one.
    pub fn spacer() -> Self {
        Self {
            name: SPACER_NAME.to_string(),
            enabled: true,
            removable: true,
        }
    }
}

/// Shared settings state, created once at startup and alive for the
/// process lifetime.
#[derive(Debug, Clone)]
pub struct TaskbarSettings {
    pub order: Vec<TaskbarItem>,
    /// User intent for the bluetooth module. Real visibility is gated
    /// by the bluetooth subsystem, which consumes this flag.
    pub bluetooth_enabled: bool,
}

impl Default for TaskbarSettings {
    fn default() -> Self {
        Self {
            order: default_order(),
            bluetooth_enabled: true,
        }
    }
}

impl TaskbarSettings {
    /// Load from the per-user settings file and push the result onto
    /// the panel.
    pub fn load<P: Panel>(panel: Option<&mut P>) -> Self {
        Self::from_order(config::load(), panel)
    }

    /// Load from an explicit path (tests and alternate locations).
    pub fn load_from<P: Panel>(path: &Path, panel: Option<&mut P>) -> Self {
        Self::from_order(config::load_from(path), panel)
    }

    fn from_order<P: Panel>(order: Vec<TaskbarItem>, panel: Option<&mut P>) -> Self {
        let mut settings = Self {
            order,
            bluetooth_enabled: true,
        };
        merge_order_with_panel(
            &mut settings.order,
            &mut settings.bluetooth_enabled,
            panel,
        );
        settings
    }

    /// Persist the panel's applied order; called when the settings
    /// window closes.
    pub fn save<P: Panel>(&self, panel: Option<&P>) -> Result<()> {
        config::save(panel, self.bluetooth_enabled)
    }

    /// Persist to an explicit path.
    pub fn save_to<P: Panel>(&self, path: &Path, panel: Option<&P>) -> Result<()> {
        config::save_to(path, panel, self.bluetooth_enabled)
    }

    /// Row models for the visual list, in canonical order. The
    /// bluetooth row shows user intent, not the externally gated item
    /// state.
    pub fn rows(&self) -> Vec<RowModel> {
        self.order
            .iter()
            .map(|item| RowModel {
                name: item.name.clone(),
                enabled: if item.name == BLUETOOTH_NAME {
                    self.bluetooth_enabled
                } else {
                    item.enabled
                },
                removable: item.is_spacer(),
            })
            .collect()
    }

    /// Checkbox click on one row.
    pub fn toggle<P: Panel>(&mut self, name: &str, enabled: bool, panel: Option<&mut P>) {
        if let Some(item) = self.order.iter_mut().find(|item| item.name == name) {
            item.enabled = enabled;
            debug!(name, enabled, "Toggled taskbar item");
        }
        merge_order_with_panel(&mut self.order, &mut self.bluetooth_enabled, panel);
    }

    /// Rebuild the canonical indices from the visual list's order after
    /// a drag ends. Items without a matching row rank behind every row;
    /// ties (multiple spacers, missing rows) keep their relative order.
    /// A gesture that never reordered anything commits as a no-op.
    pub fn commit_visual_order<P: Panel>(&mut self, row_names: &[&str], panel: Option<&mut P>) {
        self.order.sort_by_key(|item| {
            row_names
                .iter()
                .position(|name| *name == item.name)
                .unwrap_or(row_names.len())
        });
        renumber_sequentially(&mut self.order);
        merge_order_with_panel(&mut self.order, &mut self.bluetooth_enabled, panel);
    }

    /// Reset to the default catalog, push it onto the panel, and
    /// persist immediately.
    pub fn reset_to_default<P: Panel>(&mut self, mut panel: Option<&mut P>) -> Result<()> {
        info!("Resetting taskbar order to default");
        self.order = default_order();
        merge_order_with_panel(
            &mut self.order,
            &mut self.bluetooth_enabled,
            panel.as_deref_mut(),
        );
        self.save(panel.as_deref())
    }
}
