// ./src/main.rs
use clap::Parser;
use planar_geometry::{
    debug::visualization::{write_shapes_svg, write_triangles_svg},
    math::prelude::*,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_SHAPES: &str =
    "circle -3 0 2.0; line -4 0 12 0; polygon 10 2 1.5 6; triangle -3 1 2 1 -2 4; rectangle -5 -4 3 2";

/// Punktwolke für die Triangulation, wenn kein Seed angegeben ist.
const DEFAULT_CLOUD: [(f64, f64); 5] = [(0.0, 0.0), (10.0, 0.0), (5.0, 8.0), (15.0, 5.0), (2.0, 12.0)];

/// Analysiert eine Formliste: Höhen, Schnittpunkte, Abstände, Kollisionen,
/// konvexe Hülle und Delaunay-Triangulation.
#[derive(Parser, Debug)]
#[command(name = "planar_geometry", version)]
struct Cli {
    /// Formen als `;`-getrennte Datensätze, z.B. "circle 0 0 1; line 0 0 1 1".
    #[arg(long, default_value = DEFAULT_SHAPES)]
    shapes: String,

    /// Testpunkt für Abstandsabfragen als "x,y".
    #[arg(long, value_parser = parse_point, default_value = "10,10", allow_hyphen_values = true)]
    point: Point,

    /// Schwelle für "hohe" Formen.
    #[arg(long, default_value_t = 50.0)]
    height_threshold: f64,

    /// Verzeichnis für SVG-Ausgaben (shapes.svg, hull.svg, delaunay.svg).
    #[arg(long)]
    svg_dir: Option<PathBuf>,

    /// Seed für eine zufällige Triangulations-Punktwolke statt der festen.
    #[arg(long)]
    seed: Option<u64>,

    /// Größe der zufälligen Punktwolke.
    #[arg(long, default_value_t = 30)]
    cloud_size: usize,

    /// Bericht als JSON auf stdout ausgeben.
    #[arg(long)]
    json: bool,
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected 'x,y', got '{value}'"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|_| format!("'{s}' is not a number"))
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}

#[derive(Debug, Serialize)]
struct ShapeEntry {
    index: usize,
    shape: Shape,
    height: f64,
    bounding_box: BoundingBox,
}

#[derive(Debug, Serialize)]
struct IntersectionEntry {
    other: usize,
    point: Point,
}

#[derive(Debug, Serialize)]
struct DistanceEntry {
    first: usize,
    second: usize,
    distance: f64,
}

#[derive(Debug, Serialize)]
struct Report {
    shapes: Vec<ShapeEntry>,
    intersections_with_first: Vec<IntersectionEntry>,
    probe: Point,
    probe_distances: Vec<f64>,
    collisions: Vec<(usize, usize)>,
    tallest: Option<usize>,
    shape_distances: Vec<DistanceEntry>,
    above_threshold: Vec<usize>,
    min_height: Option<f64>,
    max_height: Option<f64>,
    hull: Vec<Point>,
    triangulation_points: Vec<Point>,
    triangulation: Vec<DelaunayTriangle>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ApproximationConfig::default();
    config.validate()?;

    let shapes = parse_shapes(&cli.shapes);
    info!("Parsed {} shapes", shapes.len());

    let report = analyze(&cli, &shapes, &config);

    if let Some(dir) = &cli.svg_dir {
        write_svgs(dir, &shapes, &report, &config)?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, cli.height_threshold);
    }
    Ok(())
}

fn analyze(cli: &Cli, shapes: &[Shape], config: &ApproximationConfig) -> Report {
    let heights: Vec<f64> = shapes.iter().map(height).collect();

    let intersections_with_first = match shapes.first() {
        Some(first) => shapes
            .iter()
            .enumerate()
            .filter_map(|(other, shape)| match intersection_point(first, shape) {
                Ok(point) => point.map(|point| IntersectionEntry { other, point }),
                // Nicht unterstützte Paare werden übersprungen.
                Err(MathError::UnsupportedIntersection { .. }) => None,
                Err(err) => {
                    warn!("Intersection with shape {other} failed: {err}");
                    None
                }
            })
            .collect(),
        None => Vec::new(),
    };

    let probe_distances = shapes
        .iter()
        .take(5)
        .map(|shape| distance_to_point(shape, cli.point))
        .collect();

    let shape_distances = match shapes.first() {
        Some(first) => shapes
            .iter()
            .enumerate()
            .take(3)
            .filter_map(|(second, shape)| {
                distance_between_shapes(first, shape).map(|distance| DistanceEntry {
                    first: 0,
                    second,
                    distance,
                })
            })
            .collect(),
        None => Vec::new(),
    };

    let mut vertices: Vec<Point> = shapes.iter().flat_map(|s| s.vertices(config)).collect();
    info!("Collected {} points from all shapes", vertices.len());
    let hull = hull_or_skip(&mut vertices);

    let triangulation_points: Vec<Point> = match cli.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..cli.cloud_size)
                .map(|_| Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
                .collect()
        }
        None => DEFAULT_CLOUD.iter().copied().map(Point::from).collect(),
    };
    let triangulation = triangulate_or_skip(&triangulation_points);

    Report {
        shapes: shapes
            .iter()
            .zip(&heights)
            .enumerate()
            .map(|(index, (shape, &height))| ShapeEntry {
                index,
                shape: shape.clone(),
                height,
                bounding_box: bounding_box(shape),
            })
            .collect(),
        intersections_with_first,
        probe: cli.point,
        probe_distances,
        collisions: find_all_collision_indices(shapes),
        tallest: find_highest_shape(shapes),
        shape_distances,
        above_threshold: heights
            .iter()
            .enumerate()
            .filter(|&(_, &h)| h > cli.height_threshold)
            .map(|(index, _)| index)
            .take(3)
            .collect(),
        min_height: heights.iter().copied().reduce(f64::min),
        max_height: heights.iter().copied().reduce(f64::max),
        hull,
        triangulation_points,
        triangulation,
    }
}

/// Konvexe Hülle, oder leer mit Warnung wenn die Vorbedingung verletzt ist.
fn hull_or_skip(vertices: &mut [Point]) -> Vec<Point> {
    graham_scan(vertices).unwrap_or_else(|err| {
        warn!("Skipping convex hull: {err}");
        Vec::new()
    })
}

fn triangulate_or_skip(points: &[Point]) -> Vec<DelaunayTriangle> {
    delaunay_triangulation(points).unwrap_or_else(|err| {
        warn!("Skipping Delaunay triangulation: {err}");
        Vec::new()
    })
}

fn write_svgs(
    dir: &Path,
    shapes: &[Shape],
    report: &Report,
    config: &ApproximationConfig,
) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    write_shapes_svg(dir.join("shapes.svg"), shapes, config)?;

    if report.hull.len() >= 3 {
        let mut with_hull = shapes.to_vec();
        with_hull.push(Polygon::new(report.hull.clone())?.into());
        write_shapes_svg(dir.join("hull.svg"), &with_hull, config)?;
    }

    write_triangles_svg(dir.join("delaunay.svg"), &report.triangulation)?;
    Ok(())
}

fn print_report(report: &Report, height_threshold: f64) {
    println!("=== Shapes and their heights ===");
    for entry in &report.shapes {
        println!("Shape {}: {} height {:.2}", entry.index, entry.shape, entry.height);
    }

    println!("\n=== Intersections ===");
    if report.intersections_with_first.is_empty() {
        println!("No intersections found between supported shape types.");
    }
    for entry in &report.intersections_with_first {
        println!(
            "Intersection found at point {} between shape 0 and shape {}",
            entry.point, entry.other
        );
    }

    println!("\n=== Distance from Point ===");
    for (index, distance) in report.probe_distances.iter().enumerate() {
        println!(
            "Distance from point {} to shape {index} is {distance:.2}",
            report.probe
        );
    }

    println!("\n=== Shape Analysis ===");
    println!(
        "Found {} collisions using Bounding Box method",
        report.collisions.len()
    );
    for (i, j) in &report.collisions {
        println!("  Shapes {i} and {j}");
    }
    if let Some(index) = report.tallest {
        println!(
            "Highest shape is at index {index} with height {:.2}",
            report.shapes[index].height
        );
    }
    for entry in &report.shape_distances {
        println!(
            "Distance between shape {} and shape {} is {:.2}",
            entry.first, entry.second, entry.distance
        );
    }

    println!("\n=== Shape Extra Analysis ===");
    println!("Shapes with height > {height_threshold:.1}:");
    for &index in &report.above_threshold {
        println!("  Shape {index}: height {:.2}", report.shapes[index].height);
    }
    if let (Some(min), Some(max)) = (report.min_height, report.max_height) {
        println!("Shape with minimum height {min:.2}");
        println!("Shape with maximum height {max:.2}");
    }

    println!("\n=== Convex Hull ===");
    if report.hull.is_empty() {
        println!("No convex hull (fewer than 3 vertices)");
    } else {
        println!("Convex hull with {} points:", report.hull.len());
        for p in &report.hull {
            println!("  {p}");
        }
    }

    println!("\n=== Delaunay Triangulation ===");
    if report.triangulation.is_empty() {
        println!("No triangulation (fewer than 3 usable points)");
        return;
    }
    println!(
        "{} points -> {} triangles (total area {:.2})",
        report.triangulation_points.len(),
        report.triangulation.len(),
        total_area(&report.triangulation)
    );
    for triangle in &report.triangulation {
        println!("  {triangle}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("planar_geometry").chain(args.iter().copied()))
    }

    #[test]
    fn test_small_random_cloud_does_not_abort_report() {
        let cli = cli(&["--seed", "3", "--cloud-size", "2"]);
        let shapes = parse_shapes(&cli.shapes);
        let report = analyze(&cli, &shapes, &ApproximationConfig::default());

        assert_eq!(report.triangulation_points.len(), 2);
        assert!(report.triangulation.is_empty());
        assert_eq!(report.shapes.len(), shapes.len());
        assert!(report.hull.len() >= 3);
    }

    #[test]
    fn test_precondition_failures_are_skipped() {
        let mut two = vec![Point::ZERO, Point::new(1.0, 0.0)];
        assert!(hull_or_skip(&mut two).is_empty());
        assert!(triangulate_or_skip(&two).is_empty());
    }

    #[test]
    fn test_parse_point_argument() {
        assert_eq!(parse_point("-1.5, 2").unwrap(), Point::new(-1.5, 2.0));
        assert!(parse_point("1;2").is_err());
    }
}
