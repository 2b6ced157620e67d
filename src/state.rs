// src/state.rs

use crate::controller::Controller;
use crate::physics::generator::RandomGeometry;
use crate::ui::GtkSurface;

pub type AppController = Controller<RandomGeometry>;

/// What the action handlers share. Borrowed mutably for the whole of an
/// operation, including the modal dialogs and the viewer it opens.
pub struct AppState {
    pub controller: AppController,
    pub surface: GtkSurface,
}
