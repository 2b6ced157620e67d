// src/utils/geometry.rs

use std::f64::consts::{PI, TAU};

pub type Point3 = [f64; 3];

/// `n` evenly spaced samples over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Physics convention: `theta` is polar (from +Z), `phi` is azimuth.
pub fn spherical_to_cartesian(r: f64, theta: f64, phi: f64) -> Point3 {
    let (sin_t, cos_t) = theta.sin_cos();
    let (sin_p, cos_p) = phi.sin_cos();
    [r * sin_t * cos_p, r * sin_t * sin_p, r * cos_t]
}

/// Grid of points on a sphere: rows walk the polar angle 0..=PI,
/// columns walk the azimuth 0..=2PI.
pub fn sphere_grid(radius: f64, resolution: usize) -> Vec<Vec<Point3>> {
    let thetas = linspace(0.0, PI, resolution);
    let phis = linspace(0.0, TAU, resolution);
    thetas
        .iter()
        .map(|&t| {
            phis.iter()
                .map(|&p| spherical_to_cartesian(radius, t, p))
                .collect()
        })
        .collect()
}

pub fn norm(p: Point3) -> f64 {
    (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
}
