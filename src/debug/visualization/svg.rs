// src/debug/visualization/svg.rs
use crate::math::{
    algorithms::DelaunayTriangle,
    geometry::{ApproximationConfig, Shape},
    types::{BoundingBox, Point},
};
use std::path::Path;
use svg::{
    Document, Node,
    node::{
        self,
        element::{Element, Group, Polyline, Rectangle, Style},
    },
};
use tracing::info;

// ===================================================================================
// HILFS-STRUCT für die SVG-Erstellung
// ===================================================================================
/// Baut ein SVG-Dokument in Weltkoordinaten (y nach oben).
///
/// Geometrie landet in einer an der x-Achse gespiegelten Gruppe, Beschriftungen
/// werden direkt mit negiertem y gesetzt, damit der Text nicht auf dem Kopf steht.
struct SvgBuilder {
    document: Document,
    scene: Group,
    labels: Group,
    stroke_w_normal: f64,
    font_size: f64,
}

impl SvgBuilder {
    fn new(bounds: &BoundingBox, svg_pixel_size: f64) -> Self {
        let extent = (bounds.width() + bounds.height()) / 2.0;
        let extent = if extent > 0.0 { extent } else { 1.0 };
        let view = bounds.expand(extent * 0.05);

        let stroke_w_normal = extent * 0.005;
        let stroke_w_thin = extent * 0.002;
        let font_size = extent * 0.03;

        let css = format!(
            ".background {{ fill: #f0f0f0; }}
    .shape {{ fill: rgba(150, 200, 255, 0.35); stroke: #0050aa; stroke-width: {stroke_w_normal:.4}; }}
    .segment {{ fill: none; stroke: #aa2200; stroke-width: {stroke_w_normal:.4}; }}
    .triangle {{ fill: rgba(150, 255, 150, 0.4); stroke: #00aa00; stroke-width: {stroke_w_thin:.4}; }}
    .label {{ font-family: monospace; font-size: {font_size:.4}px; fill: #000000; text-anchor: middle; dominant-baseline: middle; }}"
        );

        let document = Document::new()
            .set("width", svg_pixel_size)
            .set("height", svg_pixel_size)
            .set(
                "viewBox",
                (view.min_x, -view.max_y, view.width(), view.height()),
            )
            .add(Style::new(css))
            .add(
                Rectangle::new()
                    .set("x", view.min_x)
                    .set("y", -view.max_y)
                    .set("width", view.width())
                    .set("height", view.height())
                    .set("class", "background"),
            );

        Self {
            document,
            scene: Group::new().set("transform", "scale(1,-1)"),
            labels: Group::new(),
            stroke_w_normal,
            font_size,
        }
    }

    /// Zeichnet einen offenen oder geschlossenen Linienzug.
    fn draw_polyline(&mut self, vertices: &[Point], class: &str) {
        if vertices.len() < 2 {
            return;
        }
        let points = vertices
            .iter()
            .map(|p| format!("{:.4},{:.4}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.scene
            .append(Polyline::new().set("points", points).set("class", class));
    }

    /// Setzt eine Beschriftung an eine Weltposition.
    fn draw_text(&mut self, pos: Point, text: &str) {
        let mut label = Element::new("text");
        label.assign("x", format!("{:.4}", pos.x));
        label.assign("y", format!("{:.4}", -pos.y));
        label.assign("class", "label");
        label.append(node::Text::new(text));
        self.labels.append(label);
    }

    /// Speichert die SVG-Datei.
    fn save(self, path: &Path) -> std::io::Result<()> {
        let document = self.document.add(self.scene).add(self.labels);
        svg::save(path, &document)?;
        info!(
            "Debug SVG '{}' written (stroke {:.3}, font {:.3})",
            path.display(),
            self.stroke_w_normal,
            self.font_size
        );
        Ok(())
    }
}

/// Bounding Box über eine Menge von Punktlisten, `None` wenn alle leer sind.
fn bounds_of<'a>(outlines: impl IntoIterator<Item = &'a [Point]>) -> Option<BoundingBox> {
    BoundingBox::from_points_iter(outlines.into_iter().flatten().copied())
}

/// Zeichnet die Umrisse aller Formen und beschriftet sie mit ihrem Index.
///
/// Kreise werden mit `config.circle_outline_segments` Segmenten angenähert.
/// Eine leere Formliste erzeugt ein leeres Dokument.
pub fn write_shapes_svg(
    path: impl AsRef<Path>,
    shapes: &[Shape],
    config: &ApproximationConfig,
) -> std::io::Result<()> {
    let outlines: Vec<Vec<Point>> = shapes.iter().map(|s| s.outline(config)).collect();
    let bounds = bounds_of(outlines.iter().map(Vec::as_slice))
        .unwrap_or_else(|| BoundingBox::from_center_radius(Point::ZERO, 1.0));

    let mut svg = SvgBuilder::new(&bounds, 800.0);
    for (index, (shape, outline)) in shapes.iter().zip(&outlines).enumerate() {
        let class = match shape {
            Shape::Segment(_) => "segment",
            Shape::Triangle(_)
            | Shape::Rectangle(_)
            | Shape::RegularPolygon(_)
            | Shape::Circle(_)
            | Shape::Polygon(_) => "shape",
        };
        svg.draw_polyline(outline, class);
        svg.draw_text(shape.center(), &index.to_string());
    }
    svg.save(path.as_ref())
}

/// Zeichnet eine Triangulation, jedes Dreieck als geschlossener Linienzug.
pub fn write_triangles_svg(
    path: impl AsRef<Path>,
    triangles: &[DelaunayTriangle],
) -> std::io::Result<()> {
    let outlines: Vec<[Point; 4]> = triangles
        .iter()
        .map(|t| [t.a, t.b, t.c, t.a])
        .collect();
    let bounds = bounds_of(outlines.iter().map(|o| o.as_slice()))
        .unwrap_or_else(|| BoundingBox::from_center_radius(Point::ZERO, 1.0));

    let mut svg = SvgBuilder::new(&bounds, 800.0);
    for outline in &outlines {
        svg.draw_polyline(outline, "triangle");
    }
    svg.save(path.as_ref())
}
