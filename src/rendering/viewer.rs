// src/rendering/viewer.rs

use super::painter;
use crate::config::{PlotStyle, ViewerSettings};
use crate::model::atom::AtomModel;
use crate::ui::dialogs::run_until_closed;
use gtk4::prelude::*;
use gtk4::{DrawingArea, Window};
use plotters::prelude::IntoDrawingArea;
use plotters_cairo::CairoBackend;
use std::rc::Rc;

/// Opens the two-panel model window and returns once the user closes it.
pub fn show_model_window(
    parent: Option<&Window>,
    model: &AtomModel,
    viewer: &ViewerSettings,
    style: &PlotStyle,
) {
    let window = Window::builder()
        .title(format!("ChemSim - {}", model.label))
        .modal(true)
        .default_width(viewer.width)
        .default_height(viewer.height)
        .build();
    window.set_transient_for(parent);

    let drawing_area = DrawingArea::new();
    drawing_area.set_hexpand(true);
    drawing_area.set_vexpand(true);

    let model = Rc::new(model.clone());
    let (viewer, style) = (viewer.clone(), style.clone());
    drawing_area.set_draw_func(move |_, cr, w, h| {
        let backend = match CairoBackend::new(cr, (w as u32, h as u32)) {
            Ok(b) => b,
            Err(e) => {
                log::error!("Cannot attach plot backend: {:?}", e);
                return;
            }
        };
        let root = backend.into_drawing_area();
        if let Err(e) = painter::draw_atom_model(&root, &model, &viewer, &style) {
            log::error!("Rendering {} failed: {}", model.label, e);
        }
    });

    window.set_child(Some(&drawing_area));
    run_until_closed(&window);
}
