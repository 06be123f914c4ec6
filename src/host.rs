//! Collaborator traits.
//!
//! The coordinator performs no OS integration itself. The windowing
//! toolkit, the live menu, command routing, app identity, and the update
//! notifier are injected through the traits here. Everything is
//! single-threaded: handles are `Rc` and no trait requires `Send`.

use std::fmt;
use std::rc::Rc;

use anyhow::Result;

use crate::template::MenuItemSpec;
use crate::update::UpdateState;

/// Identifier of a window managed by the [`WindowHost`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    /// Construct a `WindowId` from the host toolkit's raw identifier.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Convert the `WindowId` back into the underlying integer.
    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for WindowId {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(fmtr)
    }
}

/// Handle to an item of an already-constructed menu.
///
/// Native menu items are reference types on every platform, so visibility
/// and enablement toggle through `&self`.
pub trait MenuItemHandle {
    /// Text label, if the item has one.
    fn label(&self) -> Option<String>;

    /// Whether translation flagged this item window-specific.
    fn window_specific(&self) -> bool;

    /// Show or hide the item.
    fn set_visible(&self, visible: bool);

    /// Enable or disable the item.
    fn set_enabled(&self, enabled: bool);

    /// Child items in display order. Empty for leaf items.
    fn submenu(&self) -> Vec<Rc<dyn MenuItemHandle>>;
}

/// A menu constructed by the host from a finalized template.
pub trait LiveMenu {
    /// Top-level items in display order.
    fn items(&self) -> Vec<Rc<dyn MenuItemHandle>>;
}

/// The host toolkit's menu-construction primitive.
pub trait MenuHost {
    /// The live menu type this host constructs.
    type Menu: LiveMenu;

    /// Construct a live menu from a finalized template.
    fn build_from_template(&mut self, template: &[MenuItemSpec]) -> Result<Self::Menu>;

    /// Install a constructed menu as the application-level menu.
    fn set_application_menu(&mut self, menu: &Self::Menu) -> Result<()>;
}

/// Window queries and operations used by the default template.
pub trait WindowHost {
    /// The window currently holding focus, if any.
    fn focused_window(&self) -> Option<WindowId>;

    /// Reload the window's contents.
    fn reload(&self, window: WindowId);

    /// Close the window.
    fn close(&self, window: WindowId);

    /// Toggle the window's developer tools.
    fn toggle_dev_tools(&self, window: WindowId);
}

/// Application identity and lifecycle.
pub trait AppHandle {
    /// Display name, used as the first menu bar label.
    fn name(&self) -> String;

    /// Quit the application.
    fn quit(&self);
}

/// Routes command identifiers to whatever executes them.
///
/// Injected at construction rather than reached through process-global
/// state; translated menu items capture a handle to it in their click
/// callbacks.
pub trait CommandDispatcher {
    /// Forward a command identifier (e.g. `"pane:split-right"`).
    fn send_command(&self, command: &str);
}

/// Read access to the external auto-update state machine.
///
/// State changes are pushed into the coordinator by the event loop via
/// [`crate::MenuCoordinator::update_state_changed`]; this trait covers the
/// pull side used after each activation.
pub trait UpdateNotifier {
    /// The state machine's current phase.
    fn state(&self) -> UpdateState;
}

/// Flatten a live menu in pre-order: each item precedes its descendants.
///
/// Used for linear label-based lookups; label collisions resolve to the
/// first match in this order.
pub fn flatten_menu_items<M: LiveMenu + ?Sized>(menu: &M) -> Vec<Rc<dyn MenuItemHandle>> {
    let mut flat = Vec::new();
    walk(menu.items(), &mut flat);
    flat
}

fn walk(items: Vec<Rc<dyn MenuItemHandle>>, flat: &mut Vec<Rc<dyn MenuItemHandle>>) {
    for item in items {
        let children = item.submenu();
        flat.push(item);
        walk(children, flat);
    }
}
