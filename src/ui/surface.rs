// src/ui/surface.rs

use super::dialogs;
use crate::config::Config;
use crate::controller::UiSurface;
use crate::model::atom::AtomModel;
use crate::rendering::show_model_window;
use gtk4::prelude::*;
use gtk4::{glib, ApplicationWindow, Window};

/// Modal GTK dialogs and the model viewer, parented to the main window.
pub struct GtkSurface {
    parent: glib::WeakRef<ApplicationWindow>,
    config: Config,
}

impl GtkSurface {
    pub fn new(parent: &ApplicationWindow, config: Config) -> Self {
        Self {
            parent: parent.downgrade(),
            config,
        }
    }

    fn parent(&self) -> Option<Window> {
        self.parent.upgrade().map(|w| w.upcast())
    }
}

impl UiSurface for GtkSurface {
    fn prompt_symbol(&mut self, title: &str, message: &str) -> Option<String> {
        dialogs::prompt_text(self.parent().as_ref(), title, message)
    }

    fn show_error(&mut self, title: &str, message: &str) {
        dialogs::show_error(self.parent().as_ref(), title, message);
    }

    fn show_model(&mut self, model: &AtomModel) {
        show_model_window(
            self.parent().as_ref(),
            model,
            &self.config.viewer,
            &self.config.style,
        );
    }
}
