// src/physics/generator.rs
//
// Synthetic atom geometry. Nothing here is physically accurate: shell radii
// grow linearly, capacities follow 2*i^2, and the nucleus is Gaussian noise.

use crate::model::atom::{AtomGeometry, ElectronShell, ParticleSet, SphereMesh};
use crate::model::elements::AtomicNumber;
use crate::utils::geometry::{sphere_grid, spherical_to_cartesian, Point3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::f64::consts::{PI, TAU};

pub const NUCLEUS_RADIUS: f64 = 0.1;
/// Standard deviation of each proton/neutron coordinate.
pub const NUCLEUS_SPREAD: f64 = 0.1;
pub const SHELL_SPACING: f64 = 0.3;
pub const MESH_RESOLUTION: usize = 100;

pub fn shell_count(z: AtomicNumber) -> u32 {
    z / 2 + 1
}

pub fn shell_radius(index: u32) -> f64 {
    SHELL_SPACING * index as f64
}

pub fn shell_capacity(index: u32) -> u32 {
    2 * index * index
}

/// Builds nucleus, shells and particle markers for atomic number `z`.
/// Never fails; `z` above the element table (mixed models) is fine.
pub fn generate<R: Rng + ?Sized>(z: AtomicNumber, rng: &mut R) -> AtomGeometry {
    let nucleus_surface = SphereMesh {
        radius: NUCLEUS_RADIUS,
        grid: sphere_grid(NUCLEUS_RADIUS, MESH_RESOLUTION),
    };

    let shells: Vec<ElectronShell> = (1..=shell_count(z))
        .map(|i| {
            let radius = shell_radius(i);
            ElectronShell {
                index: i,
                radius,
                capacity: shell_capacity(i),
                mesh: SphereMesh {
                    radius,
                    grid: sphere_grid(radius, MESH_RESOLUTION),
                },
            }
        })
        .collect();

    let protons = nucleon_cloud(z, rng);
    let neutrons = nucleon_cloud(z, rng);

    let mut placed: u32 = 0;
    let electrons = shells
        .iter()
        .map(|shell| {
            let count = shell.capacity.min(z - placed);
            placed += count;
            (0..count)
                .map(|_| {
                    let phi = rng.random_range(0.0..TAU);
                    let theta = rng.random_range(0.0..PI);
                    spherical_to_cartesian(shell.radius, theta, phi)
                })
                .collect()
        })
        .collect();

    AtomGeometry {
        nucleus_surface,
        shells,
        particles: ParticleSet {
            protons,
            neutrons,
            electrons,
        },
    }
}

fn nucleon_cloud<R: Rng + ?Sized>(count: u32, rng: &mut R) -> Vec<Point3> {
    (0..count)
        .map(|_| {
            let mut p = [0.0; 3];
            for c in &mut p {
                let v: f64 = rng.sample(StandardNormal);
                *c = v * NUCLEUS_SPREAD;
            }
            p
        })
        .collect()
}

/// Where the controller gets geometry from.
pub trait GeometrySource {
    fn generate(&mut self, z: AtomicNumber) -> AtomGeometry;
}

/// [`generate`] driven by an owned random source.
pub struct RandomGeometry<R = StdRng> {
    rng: R,
}

impl RandomGeometry<StdRng> {
    /// Reproducible: the same seed yields the same point clouds.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Fresh clouds on every call.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RandomGeometry<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> GeometrySource for RandomGeometry<R> {
    fn generate(&mut self, z: AtomicNumber) -> AtomGeometry {
        generate(z, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::geometry::norm;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn shell_count_follows_half_z() {
        let mut rng = rng();
        for z in 1..=120 {
            let g = generate(z, &mut rng);
            assert_eq!(g.shells.len() as u32, z / 2 + 1, "z = {}", z);
            assert_eq!(g.particles.electrons.len(), g.shells.len());
            for (i, shell) in g.shells.iter().enumerate() {
                let idx = i as u32 + 1;
                assert_eq!(shell.index, idx);
                assert_eq!(shell.capacity, 2 * idx * idx);
                assert!((shell.radius - 0.3 * idx as f64).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn electrons_never_exceed_z_and_fill_when_capacity_allows() {
        let mut rng = rng();
        for z in 1..=120u32 {
            let g = generate(z, &mut rng);
            let total = g.particles.electron_count() as u32;
            assert!(total <= z);
            let capacity: u32 = g.shells.iter().map(|s| s.capacity).sum();
            assert_eq!(total, z.min(capacity), "z = {}", z);
            for (shell, placed) in g.shells.iter().zip(&g.particles.electrons) {
                assert!(placed.len() as u32 <= shell.capacity);
            }
        }
    }

    #[test]
    fn nucleons_split_evenly() {
        let mut rng = rng();
        for z in [1, 2, 26, 79, 105] {
            let g = generate(z, &mut rng);
            assert_eq!(g.particles.protons.len(), z as usize);
            assert_eq!(g.particles.neutrons.len(), z as usize);
        }
    }

    #[test]
    fn helium_fills_first_shell_only() {
        let g = generate(2, &mut rng());
        let per_shell: Vec<usize> = g.particles.electrons.iter().map(Vec::len).collect();
        assert_eq!(per_shell, vec![2, 0]);
    }

    #[test]
    fn oxygen_overflows_into_second_shell() {
        let g = generate(8, &mut rng());
        let per_shell: Vec<usize> = g.particles.electrons.iter().map(Vec::len).collect();
        assert_eq!(per_shell, vec![2, 6, 0, 0, 0]);
    }

    #[test]
    fn electrons_sit_on_their_shell_radius() {
        let g = generate(40, &mut rng());
        for (shell, placed) in g.shells.iter().zip(&g.particles.electrons) {
            for &e in placed {
                assert!((norm(e) - shell.radius).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn nucleus_mesh_is_fixed() {
        let small = generate(1, &mut rng());
        let large = generate(105, &mut rng());
        assert_eq!(small.nucleus_surface, large.nucleus_surface);
        assert_eq!(small.nucleus_surface.resolution(), MESH_RESOLUTION);
        for row in &small.nucleus_surface.grid {
            assert_eq!(row.len(), MESH_RESOLUTION);
            for &p in row {
                assert!((norm(p) - NUCLEUS_RADIUS).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn nucleon_noise_is_centered_with_expected_spread() {
        let g = generate(1000, &mut rng());
        let coords: Vec<f64> = g
            .particles
            .protons
            .iter()
            .chain(&g.particles.neutrons)
            .flat_map(|p| p.iter().copied())
            .collect();
        let n = coords.len() as f64;
        let mean = coords.iter().sum::<f64>() / n;
        let var = coords.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / n;
        assert!(mean.abs() < 0.01, "mean = {}", mean);
        assert!((var.sqrt() - NUCLEUS_SPREAD).abs() < 0.01, "std = {}", var.sqrt());
    }

    #[test]
    fn same_seed_same_geometry() {
        let a = RandomGeometry::seeded(42).generate(13);
        let b = RandomGeometry::seeded(42).generate(13);
        assert_eq!(a, b);
        let c = RandomGeometry::seeded(43).generate(13);
        assert_ne!(a.particles, c.particles);
    }

    #[test]
    fn beyond_table_and_zero_do_not_panic() {
        let g = generate(105, &mut rng());
        assert_eq!(g.shells.len(), 53);
        assert_eq!(g.particles.electron_count(), 105);

        let empty = generate(0, &mut rng());
        assert_eq!(empty.shells.len(), 1);
        assert_eq!(empty.particles.electron_count(), 0);
    }
}
