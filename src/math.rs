//! Scalar and vector aliases shared by the whole crate.
//!
//! `Real` is `f32` by default, or `f64` under the `f64` feature — a single
//! `cfg` toggle in place of publishing two sibling crates, since a crate
//! this size has no reason to.

#[cfg(not(feature = "f64"))]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// A 2D vector. `nalgebra::Vector2` already provides `+`, `-`, scalar `*`,
/// `.dot`, and `.norm_squared()`, so there is no hand-rolled `Vec2` here.
pub type Vector2 = nalgebra::Vector2<Real>;

/// Builds a [`Vector2`] from its components — a small convenience so call
/// sites read `vector(x, y)` instead of `Vector2::new(x, y)`.
#[inline]
pub fn vector(x: Real, y: Real) -> Vector2 {
    Vector2::new(x, y)
}

#[inline]
pub fn zero() -> Vector2 {
    Vector2::new(0.0, 0.0)
}

/// Resting-contact positional tolerance: separations smaller than this are
/// treated as "touching", not "separated".
pub const SLOP: Real = 1e-3;

/// General near-zero threshold for velocity/acceleration magnitude tests.
pub const EPS: Real = 1e-6;

/// Fixed Coulomb friction coefficient (single contact point, one solver
/// iteration — see `dynamics::solver`).
pub const FRICTION: Real = 0.5;

/// Height of the implicit ground plane. Bodies at or below this height are
/// resolved directly by `solve_y`, never through the manifold solver.
pub const GROUND_Y: Real = 0.0;

/// Maximum number of points a manifold can carry. The solver only consumes
/// point 0 (see `geometry::contact`); kept at 2 as a fixed world constant.
pub const MAX_POINTS: usize = 2;

/// Accepted but unused by `solve_contacts` in this core — all contacts
/// here are perfectly inelastic.
pub const RESTITUTION: Real = 0.0;
