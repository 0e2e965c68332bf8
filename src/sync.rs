//! Reconciliation between the canonical order and the live taskbar
//!
//! The taskbar owns its child list; this engine is its only writer and
//! always performs a full replace, so the renderer never observes a
//! partially patched order. Runs after every canonical mutation (toggle,
//! drag commit, reset) and once at startup after load.

use tracing::debug;

use crate::catalog::{PanelSlot, TaskbarItem, slot_for_name, sort_by_target_index};
use crate::constants::order::BLUETOOTH_NAME;

/// Operations the live taskbar exposes to the merge engine and the
/// settings serializer.
pub trait Panel {
    /// Show or hide one child slot.
    fn set_exists(&mut self, slot: PanelSlot, exists: bool);
    /// Replace the entire child order with `slots`.
    fn reorder(&mut self, slots: &[PanelSlot]);
    /// Relayout and repaint after a structural change.
    fn request_refresh(&mut self);
    /// Live children in panel order as (container name, exists).
    fn children(&self) -> Vec<(String, bool)>;
}

/// Push the canonical order onto the live taskbar.
///
/// Sorts `order` in place (stable, ascending target index), mirrors the
/// Bluetooth item into the process-wide flag, then rebuilds the panel's
/// child list to exactly mirror the sorted order restricted to mapped
/// names. Spacers and unknown names exist only in the settings view and
/// contribute nothing to the panel.
pub fn merge_order_with_panel(
    order: &mut [TaskbarItem],
    bluetooth_enabled: &mut bool,
    panel: Option<&mut impl Panel>,
) {
    if let Some(item) = order.iter().find(|item| item.name == BLUETOOTH_NAME) {
        *bluetooth_enabled = item.enabled;
    }
    sort_by_target_index(order);

    // The panel not being live right now is normal, not a failure.
    let Some(panel) = panel else {
        debug!("Taskbar not live, order kept in memory only");
        return;
    };

    let mut slots = Vec::with_capacity(order.len());
    for item in order.iter() {
        let Some(slot) = slot_for_name(&item.name) else {
            continue;
        };
        panel.set_exists(slot, item.enabled);
        slots.push(slot);
    }
    panel.reorder(&slots);
    // The toggle records intent only. Bluetooth stays hidden until the
    // bluetooth subsystem confirms availability and re-asserts it.
    panel.set_exists(PanelSlot::Bluetooth, false);
    panel.request_refresh();
    debug!(children = slots.len(), "Merged order onto taskbar");
}
