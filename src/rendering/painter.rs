// src/rendering/painter.rs
//
// Draws an AtomModel as two 3D panels (structure | particles) on any
// plotters backend. Model coordinates are Z-up; plotters' 3D charts are
// Y-up, so every point goes through `to_chart` before drawing.

use crate::config::{PlotStyle, ViewerSettings};
use crate::model::atom::{AtomModel, SphereMesh};
use crate::utils::geometry::Point3;
use plotters::backend::DrawingBackend;
use plotters::coord::ranged3d::Cartesian3d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::prelude::*;
use std::error::Error;

type ChartPoint = (f64, f64, f64);
type DrawResult = Result<(), Box<dyn Error>>;
type Chart3d<'a, DB> = ChartContext<'a, DB, Cartesian3d<RangedCoordf64, RangedCoordf64, RangedCoordf64>>;

fn to_chart(p: Point3) -> ChartPoint {
    (p[0], p[2], p[1])
}

pub fn rgb(color: (f64, f64, f64)) -> RGBColor {
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    RGBColor(channel(color.0), channel(color.1), channel(color.2))
}

/// Grid lines of a wireframe: every `stride`-th row (parallels) and column
/// (meridians). The last row/column is always included so the sphere closes.
pub fn wireframe_polylines(mesh: &SphereMesh, stride: usize) -> Vec<Vec<Point3>> {
    let stride = stride.max(1);
    let rows = mesh.grid.len();
    let cols = mesh.grid.first().map_or(0, Vec::len);

    let mut lines = Vec::new();
    for r in strided(rows, stride) {
        lines.push(mesh.grid[r].clone());
    }
    for c in strided(cols, stride) {
        lines.push(mesh.grid.iter().map(|row| row[c]).collect());
    }
    lines
}

/// Quad facets over the mesh, merging `stride` x `stride` grid cells.
pub fn surface_facets(mesh: &SphereMesh, stride: usize) -> Vec<[Point3; 4]> {
    let rows: Vec<usize> = strided(mesh.grid.len(), stride.max(1)).collect();
    let cols: Vec<usize> = strided(mesh.grid.first().map_or(0, Vec::len), stride.max(1)).collect();

    let mut facets = Vec::new();
    for r in rows.windows(2) {
        for c in cols.windows(2) {
            let g = &mesh.grid;
            facets.push([g[r[0]][c[0]], g[r[0]][c[1]], g[r[1]][c[1]], g[r[1]][c[0]]]);
        }
    }
    facets
}

/// Marker radius in backend pixels, saturating at `i32::MAX`.
fn marker_radius(style: &PlotStyle) -> i32 {
    i32::try_from(style.marker_size).unwrap_or(i32::MAX)
}

fn strided(len: usize, stride: usize) -> impl Iterator<Item = usize> {
    let last = len.checked_sub(1);
    (0..len).filter(move |&i| i % stride == 0 || Some(i) == last)
}

// ============================================================================
// ENTRY POINT
// ============================================================================

pub fn draw_atom_model<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    model: &AtomModel,
    viewer: &ViewerSettings,
    style: &PlotStyle,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));
    draw_structure_panel(&panels[0], model, viewer, style)?;
    draw_particle_panel(&panels[1], model, viewer, style)?;
    root.present()?;
    Ok(())
}

fn build_panel<'a, DB: DrawingBackend>(
    area: &'a DrawingArea<DB, Shift>,
    title: &str,
    viewer: &ViewerSettings,
) -> Result<Chart3d<'a, DB>, Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let l = viewer.axis_limit;
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20))
        .margin(20)
        .build_cartesian_3d(-l..l, -l..l, -l..l)?;

    chart.with_projection(|mut pb| {
        pb.yaw = viewer.yaw;
        pb.pitch = viewer.pitch;
        pb.scale = 0.8;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.1))
        .max_light_lines(3)
        .draw()?;

    // Axis tags at the positive ends (model X, Y, Z)
    let tag_style = ("sans-serif", 16).into_font().color(&BLACK);
    for (tag, end) in [("X", [l, 0.0, 0.0]), ("Y", [0.0, l, 0.0]), ("Z", [0.0, 0.0, l])] {
        chart.draw_series(std::iter::once(Text::new(tag, to_chart(end), tag_style.clone())))?;
    }

    Ok(chart)
}

// ============================================================================
// LEFT PANEL: NUCLEUS SURFACE + SHELL WIREFRAMES
// ============================================================================

fn draw_structure_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    model: &AtomModel,
    viewer: &ViewerSettings,
    style: &PlotStyle,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let mut chart = build_panel(area, &model.structure_title(), viewer)?;

    let nucleus = rgb(style.nucleus_color).mix(style.nucleus_alpha);
    let facets = surface_facets(&model.geometry.nucleus_surface, style.surface_stride);
    chart.draw_series(
        facets
            .iter()
            .map(|f| Polygon::new(f.iter().copied().map(to_chart).collect::<Vec<_>>(), nucleus.filled())),
    )?;

    let shell = rgb(style.shell_color).mix(style.shell_alpha);
    for s in &model.geometry.shells {
        for line in wireframe_polylines(&s.mesh, style.wireframe_stride) {
            chart.draw_series(LineSeries::new(line.into_iter().map(to_chart), &shell))?;
        }
    }

    Ok(())
}

// ============================================================================
// RIGHT PANEL: PROTON / NEUTRON / ELECTRON MARKERS
// ============================================================================

fn draw_particle_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    model: &AtomModel,
    viewer: &ViewerSettings,
    style: &PlotStyle,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let mut chart = build_panel(area, &model.particle_title(), viewer)?;
    let particles = &model.geometry.particles;
    let size = marker_radius(style);

    let groups: [(&str, (f64, f64, f64), Vec<Point3>); 3] = [
        ("Protons", style.proton_color, particles.protons.clone()),
        ("Neutrons", style.neutron_color, particles.neutrons.clone()),
        ("Electrons", style.electron_color, particles.all_electrons().copied().collect()),
    ];

    for (name, color, points) in groups {
        let color = rgb(color);
        chart
            .draw_series(
                points
                    .into_iter()
                    .map(|p| Circle::new(to_chart(p), size, color.filled())),
            )?
            .label(name)
            .legend(move |(x, y)| Circle::new((x, y), size, color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}
