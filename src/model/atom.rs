// src/model/atom.rs

use super::elements::AtomicNumber;
use crate::utils::geometry::Point3;

/// Validated input to geometry generation: what to draw and what to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    pub label: String,
    pub atomic_number: AtomicNumber,
}

impl ModelRequest {
    pub fn single(symbol: impl Into<String>, atomic_number: AtomicNumber) -> Self {
        Self {
            label: symbol.into(),
            atomic_number,
        }
    }

    /// Naive "mixing": atomic numbers add, labels join with a dash.
    /// The result may lie beyond the element table (Fe-Au is Z = 105).
    pub fn mixed(first: &ModelRequest, second: &ModelRequest) -> Self {
        Self {
            label: format!("{}-{}", first.label, second.label),
            atomic_number: first.atomic_number + second.atomic_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SphereMesh {
    pub radius: f64,
    /// `grid[row][col]`, rows over polar angle, columns over azimuth.
    pub grid: Vec<Vec<Point3>>,
}

impl SphereMesh {
    pub fn resolution(&self) -> usize {
        self.grid.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElectronShell {
    /// 1-based shell number.
    pub index: u32,
    pub radius: f64,
    /// Nominal `2 * i^2`; the shell may hold fewer electrons.
    pub capacity: u32,
    pub mesh: SphereMesh,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleSet {
    pub protons: Vec<Point3>,
    pub neutrons: Vec<Point3>,
    /// `electrons[i - 1]` holds the electrons placed on shell `i`.
    pub electrons: Vec<Vec<Point3>>,
}

impl ParticleSet {
    pub fn electron_count(&self) -> usize {
        self.electrons.iter().map(Vec::len).sum()
    }

    pub fn all_electrons(&self) -> impl Iterator<Item = &Point3> {
        self.electrons.iter().flatten()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AtomGeometry {
    pub nucleus_surface: SphereMesh,
    pub shells: Vec<ElectronShell>,
    pub particles: ParticleSet,
}

/// Everything the presenter needs for one viewer window.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomModel {
    pub label: String,
    pub atomic_number: AtomicNumber,
    pub geometry: AtomGeometry,
}

impl AtomModel {
    pub fn structure_title(&self) -> String {
        format!("Atomic Model of {} (Z = {})", self.label, self.atomic_number)
    }

    pub fn particle_title(&self) -> String {
        format!("Particle Theory of {} (Z = {})", self.label, self.atomic_number)
    }
}
