//! Contact points and manifolds, plus the warm-start merge.
//!
//! A manifold is rebuilt from scratch every fixed step, but the solver's
//! accumulated impulses (`Pn`, `Pt` at point 0) must survive across steps
//! or the sequential-impulse solver needs many more iterations to converge
//! and resting stacks visibly vibrate. `merge_manifold` is what carries
//! those impulses forward.

use crate::dynamics::body::{BodyId, NO_BODY};
use crate::math::{zero, Real, Vector2, MAX_POINTS};

/// One contact point: world-space position, unit normal, penetration depth,
/// and the accumulated impulses the solver reads/writes each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactPoint {
    pub position: Vector2,
    /// Unit normal, pointing from body B into body A.
    pub normal: Vector2,
    pub penetration: Real,
    /// Accumulated normal impulse. Never negative — a contact only pushes.
    pub pn: Real,
    /// Accumulated tangent (friction) impulse.
    pub pt: Real,
}

impl Default for ContactPoint {
    fn default() -> Self {
        Self {
            position: zero(),
            normal: zero(),
            penetration: 0.0,
            pn: 0.0,
            pt: 0.0,
        }
    }
}

/// A cached pair description. `body_a` is always the Dynamic (or Kinematic)
/// side of the pair, `body_b` the wall side — "Dynamic first, wall second"
/// is a sufficient pair-identity rule at this scale.
///
/// Only `points[0]` is consumed by the solver; `MAX_POINTS` stays 2 even
/// though a second point is presently dead weight, documented here as a
/// known limitation rather than shrinking the array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactManifold {
    pub body_a: BodyId,
    pub body_b: BodyId,
    pub points: [ContactPoint; MAX_POINTS],
    pub point_count: usize,
}

impl Default for ContactManifold {
    fn default() -> Self {
        Self {
            body_a: NO_BODY,
            body_b: NO_BODY,
            points: [ContactPoint::default(); MAX_POINTS],
            point_count: 0,
        }
    }
}

impl ContactManifold {
    /// A single-point manifold, which is the only shape this core's
    /// narrow-phase (CCD or discrete) ever produces.
    pub fn single_point(body_a: BodyId, body_b: BodyId, point: ContactPoint) -> Self {
        debug_assert!(point.pn >= 0.0, "contact point Pn must never be negative");
        debug_assert!(
            (point.normal.norm_squared() - 1.0).abs() < 1e-3,
            "contact normal must be unit length, got {:?}",
            point.normal
        );
        let mut m = Self {
            body_a,
            body_b,
            ..Default::default()
        };
        m.points[0] = point;
        m.point_count = 1;
        m
    }

    /// The unordered pair key two manifolds must differ on: same
    /// `body_a`/`body_b` order both times, since pair construction always
    /// puts the Dynamic side first.
    #[inline]
    pub fn pair_key(&self) -> (BodyId, BodyId) {
        (self.body_a, self.body_b)
    }
}

/// Finds an existing manifold in `dst` with the same `{body_a, body_b}`
/// pair as `m` and replaces its geometry while preserving `Pn`/`Pt` at point
/// 0 (warm start); otherwise appends `m` unchanged.
///
/// Invariant after this call: each `{body_a, body_b}` pair appears at most
/// once in `dst`.
pub fn merge_manifold(dst: &mut Vec<ContactManifold>, m: ContactManifold) {
    if let Some(existing) = dst.iter_mut().find(|e| e.pair_key() == m.pair_key()) {
        let warm_pn = existing.points[0].pn;
        let warm_pt = existing.points[0].pt;
        log::trace!(
            "merge_manifold: warm-starting pair {:?} with Pn={warm_pn}, Pt={warm_pt}",
            m.pair_key()
        );
        *existing = m;
        existing.points[0].pn = warm_pn;
        existing.points[0].pt = warm_pt;
    } else {
        log::trace!("merge_manifold: new pair {:?}", m.pair_key());
        dst.push(m);
    }

    debug_assert!(
        dst.iter().filter(|e| e.pair_key() == m.pair_key()).count() == 1,
        "pair {:?} must appear at most once after merge",
        m.pair_key()
    );
}
