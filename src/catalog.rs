//! Canonical item model and the fixed module catalog
//!
//! A `TaskbarItem` is one entry of the canonical ordering: a stable name,
//! an enabled flag, and a target index that defines its sort position.
//! Target indices are not required to be contiguous; gaps are used to
//! push items that a saved order line never mentioned behind everything
//! the user explicitly arranged.

use crate::constants::order::SPACER_NAME;

/// One entry of the canonical taskbar ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarItem {
    pub name: String,
    pub enabled: bool,
    pub target_index: i32,
}

impl TaskbarItem {
    pub fn new(name: impl Into<String>, enabled: bool, target_index: i32) -> Self {
        Self {
            name: name.into(),
            enabled,
            target_index,
        }
    }

    /// Spacers exist only in the settings view and are not unique.
    pub fn is_spacer(&self) -> bool {
        self.name == SPACER_NAME
    }
}

/// Slot identifiers for the live taskbar's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelSlot {
    Super,
    SearchField,
    Workspace,
    PinnedIcons,
    Systray,
    Bluetooth,
    Battery,
    Wifi,
    Volume,
    Date,
    Notifications,
    ShowDesktop,
}

/// Static catalog in default order: display name, panel slot, and the
/// container name the panel knows the slot by.
///
/// Merge and save iterate this table instead of matching names case by
/// case, so both stay a single loop.
pub const CATALOG: [(&str, PanelSlot, &str); 12] = [
    ("Super", PanelSlot::Super, "super"),
    ("Search Field", PanelSlot::SearchField, "field_search"),
    ("Workspace", PanelSlot::Workspace, "workspace"),
    ("Pinned Icons", PanelSlot::PinnedIcons, "icons"),
    ("Systray", PanelSlot::Systray, "systray"),
    ("Bluetooth", PanelSlot::Bluetooth, "bluetooth"),
    ("Battery", PanelSlot::Battery, "battery"),
    ("Wifi", PanelSlot::Wifi, "wifi"),
    ("Volume", PanelSlot::Volume, "volume"),
    ("Date", PanelSlot::Date, "date"),
    ("Notifications", PanelSlot::Notifications, "action"),
    ("Show Desktop", PanelSlot::ShowDesktop, "minimize"),
];

/// Map a display name to its panel slot. Spacers and unknown names have
/// no slot.
pub fn slot_for_name(name: &str) -> Option<PanelSlot> {
    CATALOG
        .iter()
        .find(|(display, _, _)| *display == name)
        .map(|(_, slot, _)| *slot)
}

/// Panel-side container name for a slot.
pub fn container_name(slot: PanelSlot) -> &'static str {
    CATALOG
        .iter()
        .find(|(_, s, _)| *s == slot)
        .map(|(_, _, container)| *container)
        .unwrap_or("")
}

/// Map a panel-side container name back to its display name. Unknown
/// panel children map to nothing and are skipped by the serializer.
pub fn name_for_container(container: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(_, _, c)| *c == container)
        .map(|(display, _, _)| *display)
}

/// The default catalog: every known module enabled, in catalog order.
pub fn default_order() -> Vec<TaskbarItem> {
    CATALOG
        .iter()
        .enumerate()
        .map(|(i, (name, _, _))| TaskbarItem::new(*name, true, i as i32))
        .collect()
}

/// Stable ascending sort by target index. Stability matters: freshly
/// appended defaults share an index and must keep their relative order.
pub fn sort_by_target_index(items: &mut [TaskbarItem]) {
    items.sort_by_key(|item| item.target_index);
}

/// Assign `target_index = position` so indices are dense and monotonic
/// again after a reorder commit.
pub fn renumber_sequentially(items: &mut [TaskbarItem]) {
    for (i, item) in items.iter_mut().enumerate() {
        item.target_index = i as i32;
    }
}
