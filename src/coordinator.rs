//! The menu coordinator.
//!
//! Owns the per-window template store, tracks which window is "active" for
//! menu purposes, and rebuilds the application-level menu through the
//! injected [`MenuHost`] whenever the active template actually changes.
//! Update-state reflection runs over the live menu after every activation
//! and on every pushed state change.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use anyhow::Result;

use crate::accelerator::KeystrokesByCommand;
use crate::host::{
    AppHandle, CommandDispatcher, MenuHost, UpdateNotifier, WindowHost, WindowId,
    flatten_menu_items,
};
use crate::template::{MenuItemSpec, MenuTemplate};
use crate::translate::{substitute_version, translate_template};
use crate::update::UpdateState;

const CHECK_FOR_UPDATE: &str = "Check for Update";
const CHECKING_FOR_UPDATE: &str = "Checking for Update";
const DOWNLOADING_UPDATE: &str = "Downloading Update";
const INSTALL_UPDATE: &str = "Restart and Install Update";

/// Coordinates the application menu across windows.
///
/// All methods must be called from the UI event loop; the coordinator holds
/// no locks and relies on the loop for ordering. For a given window, a
/// focus event observed after an [`update`](Self::update) call is
/// guaranteed to reflect that update (the template is stored before any
/// activation happens).
pub struct MenuCoordinator<H: MenuHost> {
    version: String,
    menu_host: H,
    windows: Rc<dyn WindowHost>,
    app: Rc<dyn AppHandle>,
    dispatcher: Rc<dyn CommandDispatcher>,
    updates: Rc<dyn UpdateNotifier>,
    /// Last translated template per window. Entries are removed in
    /// [`window_closed`](Self::window_closed); there is no other cleanup
    /// path, so that removal is load-bearing.
    window_templates: HashMap<WindowId, MenuTemplate>,
    /// Windows whose focus/close events we act on. A focus event for a
    /// window outside this set is ignored.
    tracked_windows: HashSet<WindowId>,
    last_focused_window: Option<WindowId>,
    active_template: Option<MenuTemplate>,
    menu: Option<H::Menu>,
}

impl<H: MenuHost> MenuCoordinator<H> {
    /// Create a coordinator and install the default application menu.
    pub fn new(
        version: impl Into<String>,
        menu_host: H,
        windows: Rc<dyn WindowHost>,
        app: Rc<dyn AppHandle>,
        dispatcher: Rc<dyn CommandDispatcher>,
        updates: Rc<dyn UpdateNotifier>,
    ) -> Result<Self> {
        let mut coordinator = Self {
            version: version.into(),
            menu_host,
            windows,
            app,
            dispatcher,
            updates,
            window_templates: HashMap::new(),
            tracked_windows: HashSet::new(),
            last_focused_window: None,
            active_template: None,
            menu: None,
        };
        let template = coordinator.default_template();
        coordinator.set_active_template(template)?;
        Ok(coordinator)
    }

    /// Register a window for menu coordination.
    ///
    /// The first registered window becomes the default focus target, so a
    /// subsequent [`update`](Self::update) for it activates immediately
    /// even before any focus event arrives.
    pub fn add_window(&mut self, window: WindowId) {
        if self.last_focused_window.is_none() {
            self.last_focused_window = Some(window);
        }
        self.tracked_windows.insert(window);
        log::debug!("Tracking window {window:?} for menu coordination");
        self.enable_window_specific_items(true);
    }

    /// Translate `template`, bind it to `window`, and activate it if that
    /// window currently holds focus.
    ///
    /// Updates for background windows are stored and deferred until the
    /// window next gains focus.
    pub fn update(
        &mut self,
        window: WindowId,
        mut template: MenuTemplate,
        keystrokes_by_command: &KeystrokesByCommand,
    ) -> Result<()> {
        translate_template(&mut template, keystrokes_by_command, &self.dispatcher);
        substitute_version(&mut template, &self.version);
        self.window_templates.insert(window, template);
        if self.last_focused_window == Some(window) {
            let template = self.window_templates[&window].clone();
            self.set_active_template(template)?;
        }
        Ok(())
    }

    /// Handle a focus-gained event for `window`.
    ///
    /// Ignored for windows that were never registered or have already
    /// closed, so a late event cannot reactivate a stale template.
    pub fn window_focused(&mut self, window: WindowId) -> Result<()> {
        if !self.tracked_windows.contains(&window) {
            return Ok(());
        }
        self.last_focused_window = Some(window);
        if let Some(template) = self.window_templates.get(&window).cloned() {
            self.set_active_template(template)?;
        }
        Ok(())
    }

    /// Handle `window`'s close event.
    ///
    /// Drops the stored template and the focus association. Stored
    /// templates have no other expiry, so skipping this would accumulate
    /// menu data for the life of the process.
    pub fn window_closed(&mut self, window: WindowId) {
        if self.last_focused_window == Some(window) {
            self.last_focused_window = None;
        }
        self.window_templates.remove(&window);
        self.tracked_windows.remove(&window);
        log::debug!("Dropped menu template for closed window {window:?}");
    }

    /// Handle a state-changed notification from the update notifier.
    pub fn update_state_changed(&self, state: UpdateState) {
        self.show_update_item(state);
    }

    /// Enable or disable every live item flagged window-specific.
    ///
    /// Coarse by design of the menu model: it tracks "at least one window
    /// exists", not per-window capability.
    pub fn enable_window_specific_items(&self, enable: bool) {
        let Some(menu) = &self.menu else { return };
        for item in flatten_menu_items(menu) {
            if item.window_specific() {
                item.set_enabled(enable);
            }
        }
    }

    /// The window whose template is currently the activation target.
    pub fn last_focused_window(&self) -> Option<WindowId> {
        self.last_focused_window
    }

    /// The template currently materialized as the application menu.
    pub fn active_template(&self) -> Option<&MenuTemplate> {
        self.active_template.as_ref()
    }

    /// Install `template` as the application menu unless it is structurally
    /// equal to the one already installed. Update-state reflection re-runs
    /// either way so visibility stays correct even without a rebuild.
    fn set_active_template(&mut self, template: MenuTemplate) -> Result<()> {
        if self.active_template.as_ref() != Some(&template) {
            let menu = self.menu_host.build_from_template(&template)?;
            self.menu_host.set_application_menu(&menu)?;
            log::debug!(
                "Installed rebuilt application menu ({} top-level entries)",
                template.len()
            );
            self.active_template = Some(template);
            self.menu = Some(menu);
        }
        self.show_update_item(self.updates.state());
        Ok(())
    }

    /// Reflect `state` into the four update menu items.
    ///
    /// Menus that don't carry all four items (the default menu, minimal
    /// templates) are left alone rather than treated as an error.
    fn show_update_item(&self, state: UpdateState) {
        let Some(menu) = &self.menu else { return };
        let items = flatten_menu_items(menu);
        let find = |label: &str| {
            items
                .iter()
                .find(|item| item.label().as_deref() == Some(label))
        };
        let (Some(check), Some(checking), Some(downloading), Some(install)) = (
            find(CHECK_FOR_UPDATE),
            find(CHECKING_FOR_UPDATE),
            find(DOWNLOADING_UPDATE),
            find(INSTALL_UPDATE),
        ) else {
            return;
        };

        check.set_visible(false);
        checking.set_visible(false);
        downloading.set_visible(false);
        install.set_visible(false);
        match state {
            UpdateState::Idle | UpdateState::Error | UpdateState::NoUpdateAvailable => {
                check.set_visible(true)
            }
            UpdateState::Checking => checking.set_visible(true),
            UpdateState::Downloading => downloading.set_visible(true),
            UpdateState::UpdateAvailable => install.set_visible(true),
            // No presentable phase; every update item stays hidden.
            UpdateState::Unsupported => checking.set_visible(false),
        }
        log::trace!("Update menu items reflect state '{state}'");
    }

    /// The menu installed before any window supplies a template: the app
    /// menu with update check, window housekeeping, and quit.
    fn default_template(&self) -> MenuTemplate {
        let reload = {
            let windows = Rc::clone(&self.windows);
            move || {
                if let Some(window) = windows.focused_window() {
                    windows.reload(window);
                }
            }
        };
        let close = {
            let windows = Rc::clone(&self.windows);
            move || {
                if let Some(window) = windows.focused_window() {
                    windows.close(window);
                }
            }
        };
        let toggle_dev_tools = {
            let windows = Rc::clone(&self.windows);
            move || {
                if let Some(window) = windows.focused_window() {
                    windows.toggle_dev_tools(window);
                }
            }
        };
        let quit = {
            let app = Rc::clone(&self.app);
            move || app.quit()
        };

        vec![MenuItemSpec::labeled(self.app.name()).with_submenu(vec![
            MenuItemSpec::labeled(CHECK_FOR_UPDATE),
            MenuItemSpec::labeled("Reload")
                .with_accelerator("Command+R")
                .with_click(reload),
            MenuItemSpec::labeled("Close Window")
                .with_accelerator("Command+Shift+W")
                .with_click(close),
            MenuItemSpec::labeled("Toggle Dev Tools")
                .with_accelerator("Command+Alt+I")
                .with_click(toggle_dev_tools),
            MenuItemSpec::labeled("Quit")
                .with_accelerator("Command+Q")
                .with_click(quit),
        ])]
    }
}
