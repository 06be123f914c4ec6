//! Declarative menu templates.
//!
//! A menu is described as an ordered tree of [`MenuItemSpec`] values.
//! Templates come from template-builder code (not user input), get
//! rewritten in place by [`crate::translate`], and are handed to the
//! [`crate::host::MenuHost`] for construction once activated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Shared click callback for a menu item.
///
/// Callbacks are `Rc`-shared rather than deep-cloned, and they take no part
/// in equality: structural diffing considers declarative fields only.
pub type ClickHandler = Rc<dyn Fn()>;

/// A single entry in a menu template.
///
/// Exactly one of `command` or an author-supplied `click` (or neither, for
/// a plain entry) governs behavior. Items carrying a `command` get their
/// `accelerator` and `click` rewritten by
/// [`crate::translate::translate_template`]; items without one are left
/// as authored.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItemSpec {
    /// Text shown for this item.
    pub label: Option<String>,
    /// Abstract command identifier (e.g. `"pane:split-right"`).
    pub command: Option<String>,
    /// Platform accelerator string (e.g. `"Command+Shift+P"`).
    pub accelerator: Option<String>,
    /// Nested items, in display order.
    pub submenu: Option<Vec<MenuItemSpec>>,
    /// Coordination metadata attached during translation.
    pub metadata: Option<ItemMetadata>,
    /// Click callback. Not serialized and not part of equality.
    #[serde(skip)]
    pub click: Option<ClickHandler>,
}

impl MenuItemSpec {
    /// Create an item with the given label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Bind this item to an abstract command identifier.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set a platform accelerator string.
    pub fn with_accelerator(mut self, accelerator: impl Into<String>) -> Self {
        self.accelerator = Some(accelerator.into());
        self
    }

    /// Set nested items.
    pub fn with_submenu(mut self, submenu: Vec<MenuItemSpec>) -> Self {
        self.submenu = Some(submenu);
        self
    }

    /// Set an author-supplied click callback.
    pub fn with_click(mut self, click: impl Fn() + 'static) -> Self {
        self.click = Some(Rc::new(click));
        self
    }

    /// Whether translation flagged this item as window-specific.
    pub fn is_window_specific(&self) -> bool {
        self.metadata.is_some_and(|m| m.window_specific)
    }
}

// Equality covers declarative fields only; `click` is a closure and has no
// meaningful identity across translations.
impl PartialEq for MenuItemSpec {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.command == other.command
            && self.accelerator == other.accelerator
            && self.submenu == other.submenu
            && self.metadata == other.metadata
    }
}

impl fmt::Debug for MenuItemSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItemSpec")
            .field("label", &self.label)
            .field("command", &self.command)
            .field("accelerator", &self.accelerator)
            .field("submenu", &self.submenu)
            .field("metadata", &self.metadata)
            .field("click", &self.click.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Metadata the coordinator attaches to template items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemMetadata {
    /// The item only makes sense with at least one window open. Toggled
    /// coarsely by
    /// [`crate::MenuCoordinator::enable_window_specific_items`].
    pub window_specific: bool,
}

/// A menu template: the ordered sequence of top-level menu bar entries.
pub type MenuTemplate = Vec<MenuItemSpec>;

/// Flatten a template in pre-order: each item precedes its descendants.
///
/// Used for linear label-based lookups; label collisions resolve to the
/// first match in this order.
pub fn flatten_template(template: &[MenuItemSpec]) -> Vec<&MenuItemSpec> {
    let mut flat = Vec::new();
    flatten_into(template, &mut flat);
    flat
}

fn flatten_into<'a>(items: &'a [MenuItemSpec], flat: &mut Vec<&'a MenuItemSpec>) {
    for item in items {
        flat.push(item);
        if let Some(submenu) = &item.submenu {
            flatten_into(submenu, flat);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_equality_ignores_click() {
        let a = MenuItemSpec::labeled("Reload").with_click(|| {});
        let b = MenuItemSpec::labeled("Reload");
        assert_eq!(a, b);

        let c = MenuItemSpec::labeled("Quit");
        assert_ne!(a, c);
    }

    #[test]
    fn test_equality_covers_nested_structure() {
        let a = MenuItemSpec::labeled("File")
            .with_submenu(vec![MenuItemSpec::labeled("Open").with_accelerator("Command+O")]);
        let b = MenuItemSpec::labeled("File")
            .with_submenu(vec![MenuItemSpec::labeled("Open").with_accelerator("Command+O")]);
        assert_eq!(a, b);

        let c = MenuItemSpec::labeled("File")
            .with_submenu(vec![MenuItemSpec::labeled("Open").with_accelerator("Command+P")]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_clone_shares_click_handler() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let item = MenuItemSpec::labeled("Reload").with_click(move || counter.set(counter.get() + 1));
        let copy = item.clone();

        (copy.click.as_ref().unwrap())();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_flatten_is_preorder() {
        let template = vec![
            MenuItemSpec::labeled("File").with_submenu(vec![
                MenuItemSpec::labeled("Open"),
                MenuItemSpec::labeled("Recent")
                    .with_submenu(vec![MenuItemSpec::labeled("notes.txt")]),
            ]),
            MenuItemSpec::labeled("Edit"),
        ];

        let labels: Vec<_> = flatten_template(&template)
            .iter()
            .map(|item| item.label.clone().unwrap())
            .collect();
        assert_eq!(labels, ["File", "Open", "Recent", "notes.txt", "Edit"]);
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"
        {
            "label": "Split Right",
            "command": "pane:split-right",
            "metadata": { "windowSpecific": true }
        }"#;
        let item: MenuItemSpec = serde_json::from_str(json).unwrap();

        assert_eq!(item.label.as_deref(), Some("Split Right"));
        assert_eq!(item.command.as_deref(), Some("pane:split-right"));
        assert!(item.is_window_specific());
        assert!(item.click.is_none());
        assert!(item.submenu.is_none());
    }

    #[test]
    fn test_serialize_skips_click() {
        let item = MenuItemSpec::labeled("Reload").with_click(|| {});
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("click").is_none());
        assert_eq!(json["label"], "Reload");
    }
}
