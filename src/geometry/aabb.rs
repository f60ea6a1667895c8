//! Discrete (non-swept) box-vs-box overlap testing.
//!
//! `original_source/physics_world.cpp`'s `discrete_wall_contact` only tests
//! horizontal overlap with a fixed `(-1, 0)` normal. This module generalizes
//! that to full 2D: per-axis AABB overlap, normal taken along the axis of
//! minimum positive overlap. There is no 1D fallback left to maintain since
//! the 2D test strictly subsumes it for axis-aligned boxes.

use crate::dynamics::body::Body;
use crate::math::{vector, Real, Vector2};

/// The result of an overlapping AABB-vs-AABB test: a separating axis, unit
/// normal (pointing from `b` toward `a`), and penetration depth along it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    pub normal: Vector2,
    pub penetration: Real,
}

/// Tests whether box `a` overlaps box `b`, both given as axis-aligned
/// center + half-extents. Returns `None` when they are separated on either
/// axis.
pub fn box_overlap(a: &Body, b: &Body) -> Option<Overlap> {
    let dx = b.position.x - a.position.x;
    let overlap_x = (a.half_width + b.half_width) - dx.abs();
    if overlap_x <= 0.0 {
        return None;
    }

    let dy = b.position.y - a.position.y;
    let overlap_y = (a.half_height + b.half_height) - dy.abs();
    if overlap_y <= 0.0 {
        return None;
    }

    // Axis of minimum positive overlap is the one that separates the boxes
    // with the least motion — the standard AABB "least-penetration" rule.
    if overlap_x < overlap_y {
        let normal = if dx > 0.0 {
            vector(-1.0, 0.0)
        } else {
            vector(1.0, 0.0)
        };
        Some(Overlap {
            normal,
            penetration: overlap_x,
        })
    } else {
        let normal = if dy > 0.0 {
            vector(0.0, -1.0)
        } else {
            vector(0.0, 1.0)
        };
        Some(Overlap {
            normal,
            penetration: overlap_y,
        })
    }
}

/// A point on `a`'s face along the overlap's normal axis, used as the
/// manifold contact point for a discrete (non-swept) overlap. The other
/// axis takes `a`'s own coordinate, generalizing the legacy 1D contact
/// point `(w.position.x, b.position.y)` to whichever axis the separation
/// was found on.
pub fn contact_point(a: &Body, overlap: &Overlap) -> Vector2 {
    if overlap.normal.x != 0.0 {
        vector(a.position.x - overlap.normal.x * a.half_width, a.position.y)
    } else {
        vector(a.position.x, a.position.y - overlap.normal.y * a.half_height)
    }
}
