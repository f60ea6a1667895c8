//! Closed-form 1D time-of-impact.
//!
//! Everything here is scalar and stateless: a single local-frame axis
//! (position, velocity, acceleration relative to the other body) and a
//! horizon `dt`. `ccd::sweep` (the pair loop) is what turns this into a
//! 2D CCD pass; this module only answers "when, along one axis".

use crate::math::{Real, EPS, SLOP};

/// Result of a 1D time-of-impact query: whether the motion crosses zero
/// within `(0, dt]`, and at what time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Toi {
    pub hit: bool,
    pub t: Real,
}

impl Toi {
    const NO_HIT: Toi = Toi { hit: false, t: 0.0 };
}

/// Solves `x0 + v0*t + 0.5*a*t^2 = 0` for the smallest `t` in `(0, dt]`.
///
/// Mirrors `original_source/physics_world.cpp`'s `compute_toi`, but fixes
/// its bugs rather than porting them: the original only ever checks
/// `v0 > 0.0 && x0 < wall_x` (i.e. approach from one side) and computes its
/// discriminant with a sign error (`- 4*(x0-wall_x)*a/2` instead of
/// `v0*v0 - 2*a*x0`). The decision tree below is direction-agnostic and
/// uses the corrected discriminant.
pub fn solve_toi_1d(x0: Real, v0: Real, a: Real, dt: Real) -> Toi {
    if !x0.is_finite() || !v0.is_finite() || !a.is_finite() || dt <= 0.0 {
        return Toi::NO_HIT;
    }

    // 1. Resting: already (near) touching, not moving meaningfully — let
    // the discrete stage and split-impulse clean this up instead of
    // reporting a spurious CCD hit at t=0.
    if v0.abs() < EPS && x0.abs() < SLOP {
        return Toi::NO_HIT;
    }

    // 2. Zero acceleration: linear motion, fall through to avoid dividing
    // by a near-zero `a` in the quadratic branch below.
    if a.abs() < EPS {
        if v0.abs() < EPS {
            return Toi::NO_HIT;
        }
        let t = -x0 / v0;
        return if t >= 0.0 && t <= dt {
            Toi { hit: true, t }
        } else {
            Toi::NO_HIT
        };
    }

    // 3. Quadratic: A = a/2, B = v0, C = x0.
    let discriminant = v0 * v0 - 2.0 * a * x0;
    if !discriminant.is_finite() || discriminant < 0.0 {
        return Toi::NO_HIT;
    }
    let sqrt_d = discriminant.sqrt();

    // 4. Roots of A*t^2 + B*t + C = 0 via the quadratic formula.
    let r1 = (-v0 + sqrt_d) / a;
    let r2 = (-v0 - sqrt_d) / a;

    let mut best: Option<Real> = None;
    for r in [r1, r2] {
        if r.is_finite() && r >= 0.0 && r <= dt {
            best = Some(match best {
                Some(b) => b.min(r),
                None => r,
            });
        }
    }

    match best {
        Some(t) => Toi { hit: true, t },
        None => Toi::NO_HIT,
    }
}
