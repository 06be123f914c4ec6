//! In-place template translation.
//!
//! Rewrites command-bound items into concrete accelerator/click pairs and
//! substitutes the version label sentinel. Translation is idempotent over
//! declarative fields; click closures are rebound on every pass.

use std::rc::Rc;

use crate::accelerator::{KeystrokesByCommand, accelerator_for_command};
use crate::host::CommandDispatcher;
use crate::template::MenuItemSpec;

/// Commands with this prefix are application-global: they stay enabled
/// even with no window open and are never marked window-specific.
pub const APPLICATION_COMMAND_PREFIX: &str = "application:";

/// Label sentinel rewritten by [`substitute_version`].
const VERSION_SENTINEL: &str = "VERSION";

/// Rewrite every command-bound item in `template`, recursing through
/// submenus.
///
/// For each item carrying a `command`: the accelerator is derived from the
/// command's first keystroke (unset when the keymap has none), the click
/// callback is bound to forward the command to `dispatcher`, and the item
/// is marked window-specific unless the command is application-global.
/// Items without a `command` keep their authored `click` and `accelerator`.
pub fn translate_template(
    template: &mut [MenuItemSpec],
    keystrokes_by_command: &KeystrokesByCommand,
    dispatcher: &Rc<dyn CommandDispatcher>,
) {
    for item in template.iter_mut() {
        if let Some(command) = item.command.clone() {
            item.accelerator = accelerator_for_command(&command, keystrokes_by_command);
            let dispatcher = Rc::clone(dispatcher);
            let click_command = command.clone();
            item.click = Some(Rc::new(move || dispatcher.send_command(&click_command)));
            if !command.starts_with(APPLICATION_COMMAND_PREFIX) {
                item.metadata.get_or_insert_with(Default::default).window_specific = true;
            }
        }
        if let Some(submenu) = item.submenu.as_mut() {
            translate_template(submenu, keystrokes_by_command, dispatcher);
        }
    }
}

/// Rewrite the first pre-order item labeled exactly `VERSION` to
/// `Version <version>`. No-op when the sentinel is absent; under duplicate
/// labels only the first match changes.
pub fn substitute_version(template: &mut [MenuItemSpec], version: &str) {
    substitute_first(template, version);
}

fn substitute_first(items: &mut [MenuItemSpec], version: &str) -> bool {
    for item in items {
        if item.label.as_deref() == Some(VERSION_SENTINEL) {
            item.label = Some(format!("Version {version}"));
            return true;
        }
        if let Some(submenu) = item.submenu.as_mut()
            && substitute_first(submenu, version)
        {
            return true;
        }
    }
    false
}
