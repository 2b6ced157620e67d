//src/model/mod.rs
pub mod atom;
pub mod elements;

// Re-exports for cleaner imports
pub use atom::{AtomGeometry, AtomModel, ElectronShell, ModelRequest, ParticleSet, SphereMesh};
pub use elements::{capitalize, AtomicNumber, ElementTable};
