//! Constants for the interactive TUI module

// Timing constants
/// Status message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the key hint line under the result list
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;

/// Width of the `#id` column in the result list
pub const ID_COLUMN_WIDTH: usize = 9;

// Overlay dimensions, as a percentage of the terminal
pub const DETAILS_MODAL_WIDTH_PERCENT: u16 = 80;
pub const DETAILS_MODAL_HEIGHT_PERCENT: u16 = 85;

/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 64;

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";
