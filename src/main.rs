use chemsim::config::Config;
use chemsim::controller::Controller;
use chemsim::menu;
use chemsim::model::ElementTable;
use chemsim::physics::RandomGeometry;
use chemsim::state::AppState;
use chemsim::ui::{self, GtkSurface};
use chemsim::utils::logger;
use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{Application, ApplicationWindow, Button, Frame, Orientation, ScrolledWindow, TextView};
use std::cell::RefCell;
use std::rc::Rc;

fn main() {
    let app = Application::builder()
        .application_id("com.example.chemsim")
        .build();

    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &Application) {
    let window = ApplicationWindow::builder()
        .application(app)
        .title("ChemSim: Atomic Structure Visualizer")
        .default_width(420)
        .default_height(360)
        .build();

    // 1. TOP LEVEL: Vertical Box (Menu on top, Buttons, Console)
    let root_vbox = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root_vbox));

    // 2. Buttons, bound to the app actions registered below
    let button_box = GtkBox::new(Orientation::Vertical, 10);
    button_box.set_margin_top(10);
    button_box.set_margin_bottom(10);
    button_box.set_margin_start(20);
    button_box.set_margin_end(20);

    let btn_visualize = Button::with_label("Visualize Element");
    btn_visualize.set_action_name(Some("app.visualize"));
    let btn_mix = Button::with_label("Mix Elements");
    btn_mix.set_action_name(Some("app.mix"));
    button_box.append(&btn_visualize);
    button_box.append(&btn_mix);

    // 3. Console
    let info_frame = Frame::new(Some("Activity"));
    info_frame.set_margin_start(10);
    info_frame.set_margin_end(10);
    info_frame.set_margin_bottom(10);
    let console_view = TextView::builder()
        .editable(false).cursor_visible(false).monospace(true)
        .left_margin(10).right_margin(10).top_margin(10).bottom_margin(10)
        .build();
    let scroll_win = ScrolledWindow::builder()
        .min_content_height(150)
        .vexpand(true)
        .child(&console_view)
        .build();
    info_frame.set_child(Some(&scroll_win));

    if let Err(e) = logger::init(&console_view) {
        ui::log_to_console(&console_view, &format!("Logging unavailable: {}", e));
    }

    // --- Setup Logic ---
    let (config, config_msg) = Config::load();
    log::info!("{}", config_msg);

    let table = Rc::new(ElementTable::new());
    let geometry = RandomGeometry::from_seed_option(config.seed);
    if let Some(seed) = config.seed {
        log::info!("Using fixed seed {}", seed);
    }
    let state = Rc::new(RefCell::new(AppState {
        controller: Controller::new(table, geometry),
        surface: GtkSurface::new(&window, config),
    }));

    // 4. Menu Bar
    let menu_bar = menu::build_menu_and_actions(app, &window, state);

    // Assemble Root
    root_vbox.append(&menu_bar);
    root_vbox.append(&button_box);
    root_vbox.append(&info_frame);

    window.present();
}
