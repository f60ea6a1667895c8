//! Semi-implicit (symplectic) Euler integration for a single body.
//!
//! `semi_implicit_euler` updates velocity first, then uses the *updated*
//! velocity to update position — this ordering (as opposed to explicit
//! Euler) is what makes the scheme stable for constant-energy systems like
//! a body resting under gravity.

use crate::dynamics::body::Body;
use crate::math::Real;

/// `v ← v + a·dt; p ← p + v·dt`. Side-effect-free beyond mutating `body`.
/// `dt = 0` is a valid no-op.
pub fn semi_implicit_euler(body: &mut Body, dt: Real) {
    body.velocity += body.acceleration * dt;
    body.position += body.velocity * dt;
}

/// The Y-axis-only variant: if the body is resting on the ground/a
/// platform, its height is pinned and nothing else moves; otherwise Y
/// integrates exactly like the general case.
///
/// This is deliberately a pure function of `body.on_ground` — it does not
/// itself decide whether the body is touching ground (that is
/// `pipeline::physics_world::solve_y`'s job). Keeping it standalone means a
/// body with zero CCD wall candidates (e.g. pure freefall) still has a path
/// to move: `solve_y` calls this directly.
pub fn integrate_y(body: &mut Body, dt: Real) {
    if body.on_ground {
        body.position.y = 0.0;
    } else {
        body.velocity.y += body.acceleration.y * dt;
        body.position.y += body.velocity.y * dt;
    }
}
