// src/physics/mod.rs
pub mod generator;

pub use generator::{generate, GeometrySource, RandomGeometry};
