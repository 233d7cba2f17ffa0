use egui::emath::Float;
use egui::epaint::QuadraticBezierShape;
use egui::{pos2, Color32, Pos2, Stroke};

/// Flattening tolerance for the smoothed segments, in points.
const CURVE_TOLERANCE: f32 = 0.1;

fn midpoint(a: Pos2, b: Pos2) -> Pos2 {
    pos2(0.5 * (a.x + b.x), 0.5 * (a.y + b.y))
}

/// Control point between `a` and `b` that keeps the curve horizontal at `b`:
/// halfway along in x, already at `b`'s height.
fn control_point(a: Pos2, b: Pos2) -> Pos2 {
    pos2(0.5 * (a.x + b.x), b.y)
}

/// The stroked chain through the scaled sample points.
///
/// With `curved`, every consecutive pair is joined by two quadratic Bézier
/// segments meeting at the pair's midpoint, so the line leaves each sample
/// flat and arrives flat at the next. The curves are flattened to screen
/// points so that stroking, filling and hit-testing all share one
/// representation.
///
/// Fewer than two samples produce an empty chain.
pub(crate) fn open_points(scaled: &[Pos2], curved: bool) -> Vec<Pos2> {
    if scaled.len() < 2 {
        return Vec::new();
    }
    if !curved {
        return scaled.to_vec();
    }

    let mut points = vec![scaled[0]];
    for pair in scaled.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        let mid = midpoint(p1, p2);
        for curve in [
            QuadraticBezierShape::from_points_stroke(
                [p1, control_point(mid, p1), mid],
                false,
                Color32::TRANSPARENT,
                Stroke::NONE,
            ),
            QuadraticBezierShape::from_points_stroke(
                [mid, control_point(mid, p2), p2],
                false,
                Color32::TRANSPARENT,
                Stroke::NONE,
            ),
        ] {
            // The callback excludes the start point, so junctions are not duplicated.
            curve.for_each_flattened_with_t(CURVE_TOLERANCE, &mut |pos, _| points.push(pos));
        }
    }
    points
}

/// The open chain extended down to the baseline at both ends, enclosing the
/// area to fill.
pub(crate) fn closed_points(open: &[Pos2], baseline: f32) -> Vec<Pos2> {
    let (Some(&first), Some(&last)) = (open.first(), open.last()) else {
        return Vec::new();
    };
    let mut points = Vec::with_capacity(open.len() + 2);
    points.push(pos2(first.x, baseline));
    points.extend_from_slice(open);
    points.push(pos2(last.x, baseline));
    points
}

/// The chain point whose x is closest to `x`.
///
/// Coordinates outside the chain's extent clamp to its first/last point.
/// `None` only for an empty chain.
pub(crate) fn closest_point(points: &[Pos2], x: f32) -> Option<Pos2> {
    points
        .iter()
        .copied()
        .min_by_key(|point| (point.x - x).abs().ord())
}
