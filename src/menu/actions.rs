// src/menu/actions.rs

use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{gio, Application, ApplicationWindow};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy)]
enum Operation {
    Visualize,
    Mix,
}

pub fn setup(app: &Application, window: &ApplicationWindow, state: Rc<RefCell<AppState>>) {
    // --- VISUALIZE / MIX ---
    for (name, op) in [("visualize", Operation::Visualize), ("mix", Operation::Mix)] {
        let action = gio::SimpleAction::new(name, None);
        // Strong: the actions own the app state for the application's lifetime.
        let state = state.clone();

        action.connect_activate(move |_, _| {
            // A modal dialog or viewer from an earlier activation is still open.
            let Ok(mut s) = state.try_borrow_mut() else {
                log::warn!("Close the open window before starting another action.");
                return;
            };
            let AppState { controller, surface } = &mut *s;

            let result = match op {
                Operation::Visualize => controller.run_visualize(surface),
                Operation::Mix => controller.run_mix(surface),
            };
            if let Err(e) = result {
                log::debug!("{} aborted: {}", name, e);
            }
        });
        app.add_action(&action);
    }

    // --- QUIT ---
    let quit_action = gio::SimpleAction::new("quit", None);
    let win_weak = window.downgrade();
    quit_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak.upgrade() {
            win.close();
        }
    });
    app.add_action(&quit_action);
}
