//! Native application menu coordination.
//!
//! This crate keeps a desktop application's menu bar in sync with its
//! windows. Menus are described by declarative templates ([`MenuItemSpec`]
//! trees); the coordinator translates command-bound items into platform
//! accelerators, tracks which window's template is active as focus moves,
//! and reflects an external auto-update state machine into the visible
//! update menu items.
//!
//! Features:
//! - Per-window menu templates with focus-driven activation
//! - Structural diffing so an unchanged template never rebuilds the menu
//! - Keystroke-to-accelerator translation (`cmd-shift-p` → `Command+Shift+P`)
//! - Update-state reflection over four mutually exclusive menu items
//!
//! The windowing toolkit, command routing, app identity, and update
//! notifier all live behind the traits in [`host`]; the crate performs no
//! OS integration of its own. Everything is single-threaded and expects to
//! be driven from the UI event loop.

pub mod accelerator;
pub mod coordinator;
pub mod host;
pub mod template;
pub mod translate;
pub mod update;

pub use accelerator::{KeystrokesByCommand, accelerator_for_command};
pub use coordinator::MenuCoordinator;
pub use host::{
    AppHandle, CommandDispatcher, LiveMenu, MenuHost, MenuItemHandle, UpdateNotifier, WindowHost,
    WindowId, flatten_menu_items,
};
pub use template::{ClickHandler, ItemMetadata, MenuItemSpec, MenuTemplate, flatten_template};
pub use translate::{APPLICATION_COMMAND_PREFIX, substitute_version, translate_template};
pub use update::{ParseUpdateStateError, UpdateState};
