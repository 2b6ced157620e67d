// src/lib.rs
//
// ChemSim: simplified 3D pictures of atoms (nucleus + electron shells) and
// naive two-element "mixes". Core modules are GUI-free; the GTK front end
// sits behind the `gui` feature.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod physics;
pub mod utils;

#[cfg(feature = "gui")]
pub mod menu;
#[cfg(feature = "gui")]
pub mod rendering;
#[cfg(feature = "gui")]
pub mod state;
#[cfg(feature = "gui")]
pub mod ui;

pub use controller::{Controller, ControllerState, UiSurface};
pub use error::{ChemSimError, Result};
