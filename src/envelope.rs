//! Procedural rendering of the envelope icon.
//!
//! The icon is two filled polygons drawn onto a transparent RGBA canvas: a
//! body quadrilateral and a triangular flap layered on top of it. All
//! proportions are derived from the canvas size, so the same routine serves
//! every requested resolution.

use anyhow::{bail, Result};
use image::{Rgba, RgbaImage};

/// Stroke width for polygon outlines, in pixels.
pub const STROKE_WIDTH: f32 = 2.0;

/// Canvas sizes above this are rejected rather than allocated.
const MAX_SIZE: u32 = 8192;

/// Fill and outline colors shared by both polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fill: Rgba<u8>,
    pub outline: Rgba<u8>,
}

impl Default for Palette {
    /// The Gmail blues: fill `#1a73e8`, outline `#1557b0`.
    fn default() -> Self {
        Palette {
            fill: Rgba([26, 115, 232, 255]),
            outline: Rgba([21, 87, 176, 255]),
        }
    }
}

/// Envelope proportions derived from the canvas size.
///
/// `margin` insets the drawing 15% on every side; the body is 70% as tall as
/// it is wide, with its top edge dropped 30% of that height to leave room
/// for the flap.
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    pub margin: f32,
    pub body_width: f32,
    pub body_height: f32,
}

impl Geometry {
    pub fn for_size(size: u32) -> Self {
        let margin = size as f32 * 0.15;
        let body_width = size as f32 - margin * 2.0;
        let body_height = body_width * 0.7;

        Geometry {
            margin,
            body_width,
            body_height,
        }
    }

    /// Corner points of the envelope body, clockwise from the top left.
    pub fn body(&self) -> [(f32, f32); 4] {
        let (x, y) = (self.margin, self.margin);
        [
            (x, y + self.body_height * 0.3),
            (x + self.body_width, y + self.body_height * 0.3),
            (x + self.body_width, y + self.body_height),
            (x, y + self.body_height),
        ]
    }

    /// Flap triangle: the body's two top corners and an apex centered on the
    /// top margin.
    pub fn flap(&self) -> [(f32, f32); 3] {
        let (x, y) = (self.margin, self.margin);
        [
            (x, y + self.body_height * 0.3),
            (x + self.body_width * 0.5, y),
            (x + self.body_width, y + self.body_height * 0.3),
        ]
    }
}

/// Render the envelope icon onto a fresh transparent canvas.
///
/// Pure with respect to the filesystem; the caller decides where (and
/// whether) the result is written.
pub fn render_envelope(size: u32, palette: &Palette) -> Result<RgbaImage> {
    if size == 0 || size > MAX_SIZE {
        bail!("Can't allocate a {size}x{size} canvas");
    }

    let geometry = Geometry::for_size(size);
    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));

    // The flap is drawn second so its outline stays crisp where it crosses
    // the body's top edge.
    draw_polygon(&mut canvas, &geometry.body(), palette);
    draw_polygon(&mut canvas, &geometry.flap(), palette);

    Ok(canvas)
}

/// Fill and outline a convex polygon.
///
/// Each pixel center is classified once: within half a stroke width of any
/// edge it takes the outline color, otherwise inside the polygon it takes
/// the fill color. The outline band straddles the edge, matching a stroke
/// centered on the polygon boundary.
fn draw_polygon(canvas: &mut RgbaImage, points: &[(f32, f32)], palette: &Palette) {
    let half_stroke = STROKE_WIDTH / 2.0;

    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            if edge_distance(points, px, py) <= half_stroke {
                canvas.put_pixel(x, y, palette.outline);
            } else if point_in_polygon(points, px, py) {
                canvas.put_pixel(x, y, palette.fill);
            }
        }
    }
}

/// Even-odd containment test, sampling at pixel centers.
fn point_in_polygon(points: &[(f32, f32)], px: f32, py: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;

    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];

        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Minimum distance from a point to the polygon's boundary.
fn edge_distance(points: &[(f32, f32)], px: f32, py: f32) -> f32 {
    let mut best = f32::MAX;
    let mut j = points.len() - 1;

    for i in 0..points.len() {
        best = best.min(segment_distance(points[j], points[i], px, py));
        j = i;
    }

    best
}

/// Distance from a point to a line segment.
fn segment_distance((ax, ay): (f32, f32), (bx, by): (f32, f32), px: f32, py: f32) -> f32 {
    let (dx, dy) = (bx - ax, by - ay);
    let len_sq = dx * dx + dy * dy;

    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
    };

    let (cx, cy) = (ax + t * dx, ay + t * dy);
    ((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt()
}
