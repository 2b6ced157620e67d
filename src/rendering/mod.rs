pub mod painter;
pub mod viewer;

// Re-export specific functions to keep the API clean for the rest of the app
pub use painter::draw_atom_model;
pub use viewer::show_model_window;
