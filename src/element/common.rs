use egui::{Pos2, Rect, Vec2, pos2, vec2};

// Common constants for all shape types
pub const DEFAULT_HIT_SLOP: f32 = 3.0;
pub const TEXT_CHAR_WIDTH_RATIO: f32 = 0.6;
pub const TEXT_LINE_HEIGHT_RATIO: f32 = 1.4;

/// Axis-aligned bounds of two arbitrary corner points.
pub fn normalized(a: Pos2, b: Pos2) -> Rect {
    Rect::from_min_max(
        pos2(a.x.min(b.x), a.y.min(b.y)),
        pos2(a.x.max(b.x), a.y.max(b.y)),
    )
}

/// Euclidean distance between the gesture start and the current pointer.
pub fn radius(start: Pos2, current: Pos2) -> f32 {
    let dx = current.x - start.x;
    let dy = current.y - start.y;
    (dx * dx + dy * dy).sqrt()
}

/// Corners `(cx - r, cy - r)` and `(cx + r, cy + r)` of a circle's bounding box.
pub fn circle_bounds(center: Pos2, r: f32) -> (Pos2, Pos2) {
    (
        pos2(center.x - r, center.y - r),
        pos2(center.x + r, center.y + r),
    )
}

/// Resample the segment `start..=end` into unit steps along its major axis.
///
/// Produces `max(|dx|, |dy|) + 1` points, each rounded half-to-even. A
/// zero-length segment yields a one pixel long horizontal segment instead.
pub fn resample_line(start: Pos2, end: Pos2) -> Vec<Pos2> {
    let delta = end - start;
    let steps = delta.x.abs().max(delta.y.abs());
    if steps == 0.0 {
        return vec![start, start + vec2(1.0, 0.0)];
    }

    let increment = delta / steps;
    (0..=steps as usize)
        .map(|i| {
            let p = start + increment * i as f32;
            pos2(p.x.round_ties_even(), p.y.round_ties_even())
        })
        .collect()
}

/// Flatten points into `x, y, x, y, ...`.
pub fn flatten(points: &[Pos2]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// Pair up a flat coordinate list. `None` when the count is odd.
pub fn unflatten(coords: &[f32]) -> Option<Vec<Pos2>> {
    if coords.len() % 2 != 0 {
        return None;
    }
    Some(coords.chunks_exact(2).map(|c| pos2(c[0], c[1])).collect())
}

/// Calculate distance from a point to a line segment
pub(crate) fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Shortest distance from `point` to the closed outline through `vertices`.
pub(crate) fn distance_to_outline(point: Pos2, vertices: &[Pos2]) -> f32 {
    let n = vertices.len();
    (0..n)
        .map(|i| distance_to_line_segment(point, vertices[i], vertices[(i + 1) % n]))
        .fold(f32::INFINITY, f32::min)
}

/// Even-odd point in polygon test.
pub(crate) fn point_in_polygon(point: Pos2, vertices: &[Pos2]) -> bool {
    let mut inside = false;
    let mut j = vertices.len().wrapping_sub(1);
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        if (vi.y > point.y) != (vj.y > point.y)
            && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Hit test for rectangles: the interior when filled, otherwise a band around the border.
pub(crate) fn hit_box(point: Pos2, rect: Rect, tolerance: f32, filled: bool) -> bool {
    let outer = rect.expand(tolerance);
    if !outer.contains(point) {
        return false;
    }
    if filled {
        return true;
    }
    let inner = rect.shrink(tolerance);
    !(inner.is_positive() && inner.contains(point))
}

/// Hit test for the ellipse inscribed in `rect`, same filled/outline rule as [`hit_box`].
pub(crate) fn hit_ellipse(point: Pos2, rect: Rect, tolerance: f32, filled: bool) -> bool {
    let center = rect.center();
    let radii = rect.size() / 2.0;
    let inside = |r: Vec2| {
        if r.x <= 0.0 || r.y <= 0.0 {
            return false;
        }
        let d = point - center;
        (d.x / r.x).powi(2) + (d.y / r.y).powi(2) <= 1.0
    };

    let outer = radii + Vec2::splat(tolerance);
    if !inside(outer) {
        return false;
    }
    filled || !inside(radii - Vec2::splat(tolerance))
}

/// Calculate the bounding box for a set of points
pub(crate) fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}
