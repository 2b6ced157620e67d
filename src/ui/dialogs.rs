// src/ui/dialogs.rs
//
// Blocking modal dialogs. GTK4 dropped `gtk_dialog_run`, so each helper spins
// a nested main loop until the dialog answers or the window closes.

use gtk4::prelude::*;
use gtk4::{glib, Align, ButtonsType, Dialog, Entry, Label, MessageDialog, MessageType, ResponseType, Window};
use std::cell::Cell;
use std::rc::Rc;

/// Shows `dialog` and waits for its response. Closing the window counts as
/// `ResponseType::DeleteEvent`.
pub fn run_dialog<D: IsA<Dialog> + IsA<Window>>(dialog: &D) -> ResponseType {
    let main_loop = glib::MainLoop::new(None, false);
    let response = Rc::new(Cell::new(ResponseType::None));

    let (ml, r) = (main_loop.clone(), response.clone());
    dialog.connect_response(move |_, resp| {
        r.set(resp);
        ml.quit();
    });

    dialog.present();
    main_loop.run();
    response.get()
}

/// Shows `window` and waits until the user closes it.
pub fn run_until_closed(window: &impl IsA<Window>) {
    let main_loop = glib::MainLoop::new(None, false);
    let ml = main_loop.clone();
    window.connect_close_request(move |_| {
        ml.quit();
        glib::Propagation::Proceed
    });

    window.present();
    main_loop.run();
}

/// Single-line text prompt. `None` on Cancel or when closed.
pub fn prompt_text(parent: Option<&Window>, title: &str, message: &str) -> Option<String> {
    let dialog = Dialog::builder()
        .title(title)
        .modal(true)
        .default_width(320)
        .build();
    dialog.set_transient_for(parent);

    let content = dialog.content_area();
    content.set_margin_top(20);
    content.set_margin_bottom(20);
    content.set_margin_start(20);
    content.set_margin_end(20);
    content.set_spacing(10);

    let label = Label::new(Some(message));
    label.set_halign(Align::Start);
    content.append(&label);

    let entry = Entry::new();
    entry.set_activates_default(true);
    content.append(&entry);

    dialog.add_button("Cancel", ResponseType::Cancel);
    dialog.add_button("OK", ResponseType::Ok);
    dialog.set_default_response(ResponseType::Ok);

    let response = run_dialog(&dialog);
    let text = entry.text().to_string();
    dialog.destroy();

    (response == ResponseType::Ok).then_some(text)
}

pub fn show_error(parent: Option<&Window>, title: &str, message: &str) {
    let dialog = MessageDialog::builder()
        .modal(true)
        .message_type(MessageType::Error)
        .buttons(ButtonsType::Ok)
        .text(title)
        .secondary_text(message)
        .build();
    dialog.set_transient_for(parent);

    run_dialog(&dialog);
    dialog.destroy();
}
