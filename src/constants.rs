//! Application-wide constants
//!
//! Single source of truth for the settings file location and the magic
//! values of the order line format.

/// Settings file location
pub mod config {
    /// Directory under the user config root that holds the settings file
    pub const APP_DIR: &str = "taskbar";

    /// Settings file name
    pub const FILENAME: &str = "settings.conf";
}

/// Order line format constants
pub mod order {
    /// Key of the one recognized settings line (`order=...`)
    pub const ORDER_KEY: &str = "order";

    /// Name of the user-insertable spacer pseudo-item; unlike catalog
    /// names it may appear any number of times
    pub const SPACER_NAME: &str = "Space";

    /// Catalog item whose real visibility is gated by the bluetooth
    /// subsystem rather than the user toggle alone
    pub const BLUETOOTH_NAME: &str = "Bluetooth";

    /// Index offset for catalog items absent from a saved order line,
    /// placing them after every explicitly ordered item
    pub const UNSEEN_INDEX_OFFSET: i32 = 1000;
}
