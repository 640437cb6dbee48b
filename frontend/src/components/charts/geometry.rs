//! Coordinates for the SVG charts.
//!
//! Angles are radians measured clockwise from 12 o'clock, matching SVG's
//! y-down coordinate system.

use std::f64::consts::{PI, TAU};

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Angular extent of one pie slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceAngles {
    pub start: f64,
    pub end: f64,
}

impl SliceAngles {
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    pub fn middle(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Splits the full circle proportionally to `values`.
///
/// Non-positive and non-finite values get an empty slice. If nothing is
/// positive every slice is empty.
pub fn pie_slices(values: &[f64]) -> Vec<SliceAngles> {
    let total: f64 = values.iter().copied().filter(|v| is_positive(*v)).sum();
    let mut cursor = 0.0;
    values
        .iter()
        .map(|v| {
            let sweep = if total > 0.0 && is_positive(*v) {
                v / total * TAU
            } else {
                0.0
            };
            let slice = SliceAngles {
                start: cursor,
                end: cursor + sweep,
            };
            cursor += sweep;
            slice
        })
        .collect()
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Point on a circle of radius `r` around `center` at `angle`.
pub fn polar(center: Point, r: f64, angle: f64) -> Point {
    Point {
        x: center.x + r * angle.sin(),
        y: center.y - r * angle.cos(),
    }
}

/// SVG path of a filled pie wedge.
///
/// A wedge covering the whole circle cannot be drawn with a single arc, so it
/// is emitted as two half circles.
pub fn arc_path(center: Point, r: f64, slice: SliceAngles) -> String {
    let sweep = slice.sweep();
    if sweep >= TAU - 1e-9 {
        let top = polar(center, r, 0.0);
        let bottom = polar(center, r, PI);
        return format!(
            "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} Z",
            top.x, top.y, bottom.x, bottom.y, top.x, top.y
        );
    }
    let from = polar(center, r, slice.start);
    let to = polar(center, r, slice.end);
    let large_arc = u8::from(sweep > PI);
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {:.2} {:.2} Z",
        center.x, center.y, from.x, from.y, to.x, to.y
    )
}

/// Where a slice's percentage label goes: two thirds of the way out along
/// the slice's bisector.
pub fn slice_label_position(center: Point, r: f64, slice: SliceAngles) -> Point {
    polar(center, r * 2.0 / 3.0, slice.middle())
}

/// Whole percentage of `value` in `total`; `0` when `total` is not positive.
pub fn share_percent(value: f64, total: f64) -> u32 {
    if !is_positive(total) || !value.is_finite() || value <= 0.0 {
        return 0;
    }
    (value / total * 100.0).round() as u32
}

/// Percentage label of every slice, in order; `None` for empty slices.
pub fn slice_labels(values: &[f64]) -> Vec<Option<String>> {
    let total: f64 = values.iter().copied().filter(|v| is_positive(*v)).sum();
    values
        .iter()
        .map(|v| is_positive(*v).then(|| format!("{}%", share_percent(*v, total))))
        .collect()
}

/// Scales `values` so the largest becomes `max_len`.
///
/// Negative and non-finite values collapse to zero length.
pub fn bar_lengths(values: &[f64], max_len: f64) -> Vec<f64> {
    let max = values
        .iter()
        .copied()
        .filter(|v| is_positive(*v))
        .fold(0.0, f64::max);
    values
        .iter()
        .map(|v| {
            if max > 0.0 && is_positive(*v) {
                v / max * max_len
            } else {
                0.0
            }
        })
        .collect()
}

/// Evenly spaced points inside `width` x `height` minus `padding` on every
/// side, with the largest value at the top and zero on the bottom edge.
///
/// A single value is centered horizontally.
pub fn line_points(values: &[f64], width: f64, height: f64, padding: f64) -> Vec<Point> {
    let inner_w = (width - 2.0 * padding).max(0.0);
    let inner_h = (height - 2.0 * padding).max(0.0);
    let heights = bar_lengths(values, inner_h);
    let step = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };
    heights
        .into_iter()
        .enumerate()
        .map(|(i, h)| Point {
            x: if values.len() > 1 {
                padding + step * i as f64
            } else {
                width / 2.0
            },
            y: height - padding - h,
        })
        .collect()
}

/// `points` attribute of an SVG `<polyline>`.
pub fn polyline(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
