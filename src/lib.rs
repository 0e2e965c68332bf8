//! Reorderable taskbar settings
//!
//! Library behind a taskbar's settings surface: the user reorders and
//! toggles a fixed catalog of taskbar modules, and the arrangement
//! survives restarts. Three representations of the same ordering are
//! kept consistent at defined sync points, never aliased:
//!
//! - the canonical in-memory order ([`TaskbarSettings`]),
//! - the visual row list the user drags ([`drag::DragGesture`]),
//! - the live taskbar's actual child order (behind the [`Panel`] trait).
//!
//! Each sync point (drag commit, toggle, merge) is a one-directional
//! full rebuild. Persistence is a single `order=` line in a plain-text
//! per-user settings file; loading is best effort and never fatal.
//!
//! The host UI toolkit stays on the other side of two small traits:
//! [`drag::DragRow`] for the rows it owns and paints, and [`Panel`] for
//! the live taskbar it manages.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod constants;
pub mod drag;
pub mod settings;
pub mod sync;

pub use catalog::{PanelSlot, TaskbarItem};
pub use drag::{DragGesture, DragRow, ListGeometry};
pub use settings::{RowModel, TaskbarSettings};
pub use sync::{Panel, merge_order_with_panel};
