// src/menu/mod.rs

use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{gio, Application, ApplicationWindow};
use std::cell::RefCell;
use std::rc::Rc;

pub mod actions;

pub fn build_menu_and_actions(
    app: &Application,
    window: &ApplicationWindow,
    state: Rc<RefCell<AppState>>,
) -> gtk4::Box {
    actions::setup(app, window, state);

    // Keyboard Shortcuts
    app.set_accels_for_action("app.visualize", &["<Primary>e"]);
    app.set_accels_for_action("app.mix", &["<Primary>m"]);
    app.set_accels_for_action("app.quit", &["<Primary>q"]);

    // --- BUILD MENU BAR ---
    let menu_bar = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
    let root_model = gio::Menu::new();

    let file_menu = gio::Menu::new();
    file_menu.append(Some("Quit"), Some("app.quit"));
    root_model.append_submenu(Some("File"), &file_menu);

    let elements_menu = gio::Menu::new();
    elements_menu.append(Some("Visualize Element..."), Some("app.visualize"));
    elements_menu.append(Some("Mix Elements..."), Some("app.mix"));
    root_model.append_submenu(Some("Elements"), &elements_menu);

    let popover_bar = gtk4::PopoverMenuBar::from_model(Some(&root_model));
    menu_bar.append(&popover_bar);

    menu_bar
}
