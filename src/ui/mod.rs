pub mod dialogs;
pub mod surface;

// Re-exports
pub use surface::GtkSurface;

use gtk4::prelude::*;
use gtk4::TextView;

/// Appends a plain block of text to a console view.
pub fn log_to_console(console_view: &TextView, message: &str) {
    let buffer = console_view.buffer();
    let mut end_iter = buffer.end_iter();
    if buffer.char_count() > 0 {
        buffer.insert(&mut end_iter, "\n");
    }
    buffer.insert(&mut end_iter, message);
    let mark = buffer.create_mark(None, &end_iter, false);
    console_view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
    buffer.delete_mark(&mark);
}
