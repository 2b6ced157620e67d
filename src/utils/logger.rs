// src/utils/logger.rs
//
// `log` backend that writes into the main window's activity console.

use gtk4::prelude::*;
use gtk4::{glib, TextView};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static CONSOLE_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

const MAX_LEVEL: LevelFilter = LevelFilter::Debug;

struct ConsoleLogger;

pub fn init(view: &TextView) -> Result<(), SetLoggerError> {
  let tag_table = view.buffer().tag_table();

  for (name, color, bold) in [
    ("error", "#ff4444", true),
    ("warn", "#ffbb33", false),
    ("info", "#33b5e5", false),
    ("debug", "#aaaaaa", false),
  ] {
    if tag_table.lookup(name).is_none() {
      let tag = gtk4::TextTag::new(Some(name));
      tag.set_property("foreground", color);
      if bold {
        tag.set_property("weight", 700);
      }
      tag_table.add(&tag);
    }
  }

  let _ = CONSOLE_VIEW.set(view.downgrade().into());
  log::set_logger(&LOGGER).map(|()| log::set_max_level(MAX_LEVEL))
}

/// Console prefix and text tag for a record level.
fn level_style(level: Level) -> (&'static str, &'static str) {
  match level {
    Level::Error => ("🔴", "error"),
    Level::Warn => ("🟠", "warn"),
    Level::Info => ("🔵", "info"),
    Level::Debug => ("⚪", "debug"),
    Level::Trace => ("▫️", "debug"),
  }
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= MAX_LEVEL
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }
    let (icon, tag_name) = level_style(record.level());
    let msg = format!("{}  {}\n", icon, record.args());

    // Records may arrive while a modal loop is running; append on the
    // main context instead of touching the buffer from inside `log`.
    glib::MainContext::default().spawn_local(async move {
      let Some(view) = CONSOLE_VIEW.get().and_then(|w| w.upgrade()) else {
        return;
      };
      let buffer = view.buffer();
      let mut end = buffer.end_iter();
      buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);

      // Auto-scroll
      let mark = buffer.create_mark(None, &buffer.end_iter(), false);
      view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
      buffer.delete_mark(&mark);
    });
  }

  fn flush(&self) {}
}
