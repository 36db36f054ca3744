//! Evasion engine: where the laser goes when the cat gets close
//!
//! Two phases:
//! 1. Radial projection - push the laser out along the ray from the cat
//!    until it sits on the keep-away circle.
//! 2. Boundary correction - if that lands off the canvas, pick the nearest
//!    point where the keep-away circle crosses a canvas edge.
//!
//! Phase 2 only kicks in near edges and corners.

use glam::DVec2;

use super::shapes::{Bounds, ForbiddenZone};

/// Escape direction when the laser sits exactly on the cat: straight up
pub const FALLBACK_DIRECTION: DVec2 = DVec2::NEG_Y;

/// Next laser position for the run-away behavior
///
/// A laser already outside the zone is returned untouched. Otherwise it is
/// relocated onto the zone circle, inside the canvas when possible.
pub fn compute_next_position(laser: DVec2, zone: &ForbiddenZone, bounds: &Bounds) -> DVec2 {
    if laser.distance(zone.center) >= zone.radius {
        return laser;
    }
    relocate(laser, laser, zone, bounds)
}

/// Put the laser on the zone circle no matter how far away it is
///
/// Used when the laser should follow the cat around at exactly the
/// keep-away distance instead of idling.
pub fn project_onto_circle(laser: DVec2, zone: &ForbiddenZone, bounds: &Bounds) -> DVec2 {
    relocate(laser, laser, zone, bounds)
}

/// Laser guarding the canvas center
///
/// The laser rests at the center until the cat comes within `keep_away` of
/// it, then sits on the keep-away circle on the far side of the center.
pub fn keep_center_position(cat: DVec2, keep_away: f64, bounds: &Bounds) -> DVec2 {
    let center = bounds.center();
    if cat.distance(center) > keep_away {
        return center;
    }
    let zone = ForbiddenZone::new(cat, keep_away);
    relocate(center, center, &zone, bounds)
}

/// Every point where the zone circle crosses a canvas edge segment
///
/// Edges are visited top, bottom, left, right; on each edge the larger root
/// comes first. Roots outside the finite segment are dropped.
pub fn edge_crossings(zone: &ForbiddenZone, bounds: &Bounds) -> Vec<DVec2> {
    let mut crossings = Vec::with_capacity(8);

    for y in [0.0, bounds.height] {
        let roots = segment_roots(y - zone.center.y, zone.center.x, zone.radius, bounds.width);
        crossings.extend(roots.into_iter().flatten().map(|x| DVec2::new(x, y)));
    }
    for x in [0.0, bounds.width] {
        let roots = segment_roots(x - zone.center.x, zone.center.y, zone.radius, bounds.height);
        crossings.extend(roots.into_iter().flatten().map(|y| DVec2::new(x, y)));
    }

    crossings
}

/// Move onto the zone circle along the ray from the zone center through
/// `through`, then fix up off-canvas results
///
/// `reference` is the position the relocation distance is measured from.
fn relocate(through: DVec2, reference: DVec2, zone: &ForbiddenZone, bounds: &Bounds) -> DVec2 {
    let direction = (through - zone.center)
        .try_normalize()
        .unwrap_or(FALLBACK_DIRECTION);
    let candidate = zone.center + direction * zone.radius;

    if bounds.contains(candidate) {
        return candidate;
    }

    // No crossing means the circle misses the canvas edges entirely;
    // clamping at least keeps the dot drawable.
    nearest_crossing(zone, bounds, reference, candidate).unwrap_or_else(|| bounds.clamp(candidate))
}

/// Crossing closest to `reference`
///
/// Equal distances go to the crossing nearer the projected candidate, then
/// to the first one in edge order.
fn nearest_crossing(
    zone: &ForbiddenZone,
    bounds: &Bounds,
    reference: DVec2,
    candidate: DVec2,
) -> Option<DVec2> {
    edge_crossings(zone, bounds).into_iter().min_by(|a, b| {
        a.distance(reference)
            .total_cmp(&b.distance(reference))
            .then_with(|| a.distance(candidate).total_cmp(&b.distance(candidate)))
    })
}

/// Solve `offset² + (free - center_free)² = radius²` for `free`,
/// keeping roots within `[0, free_len]`
fn segment_roots(offset: f64, center_free: f64, radius: f64, free_len: f64) -> [Option<f64>; 2] {
    let discriminant = radius * radius - offset * offset;
    if discriminant < 0.0 || discriminant.is_nan() {
        return [None, None];
    }

    let on_segment = |v: f64| (0.0..=free_len).contains(&v).then_some(v);

    if discriminant == 0.0 {
        // Tangent: one touching point
        return [on_segment(center_free), None];
    }

    let half_chord = discriminant.sqrt();
    [
        on_segment(center_free + half_chord),
        on_segment(center_free - half_chord),
    ]
}
