//! `PhysicsWorld` — owns bodies and manifolds and runs the fixed-step
//! pipeline. This is the single largest module in the crate by design: it
//! is the only place the CCD sweep, the discrete narrow-phase, the
//! sequential-impulse solver, and the split-impulse position correction
//! are wired together in the order that makes the whole thing
//! deterministic and tunneling-free.
//!
//! Grounded on `original_source/physics_world.cpp`/`.h` for the overall
//! shape (`update`/`fixed_step`/`step_count`/`accumulator` accessors,
//! `m_fixed_dt` immutable after construction) and on
//! `TanTanDev-rapier/src/pipeline/physics_pipeline.rs`'s
//! `PhysicsPipeline::step` for the idea of a single pipeline object driving
//! several independently testable stages in a fixed order every step. The
//! original's `compute_toi`/`step_with_ccd` are a single-axis, single-wall,
//! buggy-discriminant sketch (see `ccd::toi`'s doc comment); this module
//! generalizes that sketch to a multi-wall, two-axis pipeline rather than
//! porting its bugs.

use crate::ccd::solve_toi_1d;
use crate::dynamics::body::{Body, BodyId, ShapeType};
use crate::dynamics::integrator::{integrate_y, semi_implicit_euler};
use crate::geometry::{box_overlap, contact_point, merge_manifold, ContactManifold, ContactPoint};
use crate::math::{vector, zero, Real, GROUND_Y, SLOP};

/// Owns the world's bodies and contact manifolds and advances them through
/// time. Construction fixes `fixed_dt` for the world's lifetime; nothing
/// after `new` can change it.
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    bodies: Vec<Body>,
    manifolds: Vec<ContactManifold>,
    fixed_dt: Real,
    accumulator: Real,
    steps: u64,
}

impl PhysicsWorld {
    /// Builds an empty world with the given fixed timestep. `fixed_dt` must
    /// be strictly positive — a caller bug, not a recoverable runtime
    /// condition.
    pub fn new(fixed_dt: Real) -> Self {
        debug_assert!(fixed_dt > 0.0, "fixed_dt must be positive");
        Self {
            bodies: Vec::new(),
            manifolds: Vec::new(),
            fixed_dt,
            accumulator: 0.0,
            steps: 0,
        }
    }

    /// Adds a body to the world. IDs are assigned by the host and are
    /// never reused or reassigned by the world.
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Monotonic count of completed fixed steps.
    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Residual unstepped time; always in `[0, fixed_dt)` up to float
    /// epsilon after `update` returns.
    #[must_use]
    pub fn accumulator(&self) -> Real {
        self.accumulator
    }

    /// Body 0's position, or the origin if the world is empty.
    #[must_use]
    pub fn position(&self) -> crate::math::Vector2 {
        self.bodies.first().map_or_else(zero, |b| b.position)
    }

    /// Body 0's velocity, or zero if the world is empty.
    #[must_use]
    pub fn velocity(&self) -> crate::math::Vector2 {
        self.bodies.first().map_or_else(zero, |b| b.velocity)
    }

    /// Read-only view of all bodies, in insertion order.
    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access to a single body by ID, for host-side adjustments
    /// between steps (e.g. retargeting a kinematic platform's velocity).
    /// Not meant to be called mid-step.
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Read-only view of the manifolds produced by the most recent fixed
    /// step; valid until the next `update` call.
    #[must_use]
    pub fn manifolds(&self) -> &[ContactManifold] {
        &self.manifolds
    }

    /// Advances the simulation by `frame_dt` of real (wall-clock) time.
    ///
    /// Kinematic bodies are swept by `frame_dt` directly so their motion
    /// stays smooth regardless of the fixed timestep; everything else only
    /// moves inside zero-or-more `fixed_step`s drawn from the accumulator.
    pub fn update(&mut self, frame_dt: Real) {
        for b in &mut self.bodies {
            if b.is_kinematic() {
                b.position += b.velocity * frame_dt;
            }
        }

        self.accumulator += frame_dt;
        while self.accumulator >= self.fixed_dt {
            self.fixed_step(self.fixed_dt);
            self.accumulator -= self.fixed_dt;
            self.steps += 1;
        }
    }

    /// Runs one fixed step: CCD-aware advance, velocity solve, split-impulse
    /// position correction, pseudo-velocity integration — in that order.
    fn fixed_step(&mut self, dt: Real) {
        self.step_bodies_with_ccd(dt);
        self.solve_contacts(crate::math::RESTITUTION);
        self.solve_split_impulse(dt);
        self.integrate_pseudo(dt);
    }

    /// Clears the manifold list and rebuilds it by advancing every Dynamic
    /// body against every candidate wall this step, then resolving
    /// ground/platform contact for that body.
    ///
    /// Bodies are processed in stable insertion order, and within each body
    /// walls are tested in stable insertion order — both loops below are
    /// plain index ranges over `Vec`s, never a hash-map, so this holds
    /// without extra bookkeeping.
    fn step_bodies_with_ccd(&mut self, dt: Real) {
        self.manifolds.clear();
        let n = self.bodies.len();

        for i in 0..n {
            if !self.bodies[i].is_dynamic() {
                continue;
            }

            // Taken before the box-wall loop mutates this body, so the
            // platform pass below tests against the state the body had at
            // the start of the step rather than double-consuming `dt`.
            let pre_step = self.bodies[i];

            let mut had_wall_candidate = false;
            for j in 0..n {
                if i == j {
                    continue;
                }
                if self.bodies[j].shape != ShapeType::Box {
                    continue;
                }
                had_wall_candidate = true;
                self.sweep_against_wall(i, j, dt);
            }

            self.solve_y(i, dt, had_wall_candidate);
            self.apply_platform_ccd(i, dt, &pre_step);
        }
    }

    /// Swept-advances dynamic body `i` against wall body `j` along the X
    /// axis. Copies both bodies out (both are `Copy`), mutates the local
    /// copy, writes it back — no aliasing between `bodies[i]` and
    /// `bodies[j]` is ever held live at once.
    fn sweep_against_wall(&mut self, i: usize, j: usize, dt: Real) {
        let w = self.bodies[j];
        let mut b = self.bodies[i];

        let x0 = b.position.x - w.position.x;
        let v0 = b.velocity.x - w.velocity.x;
        let a = b.acceleration.x;

        if !x0.is_finite() || !v0.is_finite() {
            // Non-finite local-frame scalars: no TOI, no discrete check for
            // this wall slot, but the body still integrates normally for the
            // full `dt` — spec.md §7 treats this exactly like a TOI miss,
            // not a frozen body.
            semi_implicit_euler(&mut b, dt);
            self.bodies[i] = b;
            return;
        }

        let toi = solve_toi_1d(x0, v0, a, dt);
        let vertical_gap_ok = (b.position.y - w.position.y).abs()
            <= SLOP + b.half_height.max(w.half_height);

        if toi.hit && vertical_gap_ok {
            let t = toi.t;
            b.position.x += b.velocity.x * t + 0.5 * a * t * t;
            b.velocity.x += a * t;
            b.position.y += b.velocity.y * t + 0.5 * b.acceleration.y * t * t;
            b.velocity.y += b.acceleration.y * t;

            // Normal opposes the relative motion that caused the hit:
            // moving right into the wall (v0 > 0) means the wall pushes
            // back along -X.
            let normal = if v0 > 0.0 {
                vector(-1.0, 0.0)
            } else {
                vector(1.0, 0.0)
            };
            let point = ContactPoint {
                position: vector(w.position.x, b.position.y),
                normal,
                penetration: 0.0,
                pn: 0.0,
                pt: 0.0,
            };
            log::trace!("ccd hit: body {} vs wall {} at t={t}", b.id, w.id);
            merge_manifold(&mut self.manifolds, ContactManifold::single_point(b.id, w.id, point));

            let remainder = dt - t;
            semi_implicit_euler(&mut b, remainder);

            if w.is_kinematic() {
                // Kinematic velocity transfer: the dynamic body picks up
                // the kinematic's full velocity vector at impact, rather
                // than an impulse computed through the solver.
                b.velocity = w.velocity;
                log::trace!("kinematic transfer: body {} <- body {}", b.id, w.id);
            }
        } else {
            semi_implicit_euler(&mut b, dt);
        }

        if let Some(overlap) = box_overlap(&b, &w) {
            let point = ContactPoint {
                position: contact_point(&b, &overlap),
                normal: overlap.normal,
                penetration: overlap.penetration,
                pn: 0.0,
                pt: 0.0,
            };
            merge_manifold(&mut self.manifolds, ContactManifold::single_point(b.id, w.id, point));
        }

        self.bodies[i] = b;
    }

    /// Ground handling: resolves penetration through the implicit floor at
    /// `GROUND_Y`, or integrates Y normally when the body isn't touching
    /// it.
    ///
    /// `had_wall_candidate` bodies already had their Y axis advanced by
    /// `sweep_against_wall`'s full-2D integration this step, so the "not on
    /// ground" branch must not integrate Y a second time — a body with no
    /// wall candidates at all (e.g. pure freefall) is the only case where
    /// `integrate_y` is its sole source of motion.
    fn solve_y(&mut self, i: usize, dt: Real, had_wall_candidate: bool) {
        let mut b = self.bodies[i];
        if b.position.y <= GROUND_Y {
            b.position.y = GROUND_Y + b.half_height;
            b.velocity.y = b.velocity.y.max(0.0);
            b.on_ground = true;
            log::trace!("ground penetration resolved for body {}", b.id);
        } else {
            b.on_ground = false;
            if !had_wall_candidate {
                integrate_y(&mut b, dt);
            }
        }
        self.bodies[i] = b;
    }

    /// Platform CCD: a 1D vertical TOI against every Static `Plane` above
    /// ground level. Ground-level planes are skipped, since
    /// `solve_y` already owns `GROUND_Y`. Tested against `pre_step` (the
    /// body's state at the top of this fixed step) so the TOI horizon isn't
    /// reused against a position the box-wall loop or `solve_y` already
    /// consumed `dt` advancing.
    fn apply_platform_ccd(&mut self, i: usize, dt: Real, pre_step: &Body) {
        let n = self.bodies.len();
        for j in 0..n {
            if i == j {
                continue;
            }
            let w = self.bodies[j];
            if w.shape != ShapeType::Plane || !w.is_static() || w.position.y <= GROUND_Y {
                continue;
            }

            let y0 = pre_step.position.y - w.position.y;
            let v0 = pre_step.velocity.y;
            let a = pre_step.acceleration.y;
            if !y0.is_finite() || !v0.is_finite() {
                continue;
            }

            let toi = solve_toi_1d(y0, v0, a, dt);
            if toi.hit {
                let b = &mut self.bodies[i];
                b.position.y = w.position.y;
                b.velocity.y = 0.0;
                b.on_ground = true;
                log::trace!("platform hit: body {} on plane {}", b.id, w.id);
            }
        }
    }

    /// Sequential-impulse velocity solve. Only point 0 of each manifold is
    /// consumed — see `ContactManifold`'s doc comment on why `MAX_POINTS`
    /// stays 2 regardless.
    ///
    /// `restitution` is accepted and threaded through per spec.md §4.8/§6
    /// ("`restitution` parameter is accepted but unused") but never applied
    /// to the normal constraint's target velocity — every contact in this
    /// core is perfectly inelastic.
    fn solve_contacts(&mut self, _restitution: Real) {
        for m in &mut self.manifolds {
            if m.point_count == 0 {
                continue;
            }

            let Some(a_idx) = self.bodies.iter().position(|b| b.id == m.body_a) else {
                continue;
            };
            let Some(b_idx) = self.bodies.iter().position(|b| b.id == m.body_b) else {
                continue;
            };
            if !self.bodies[a_idx].is_dynamic() {
                continue;
            }

            let inv_mass = self.bodies[a_idx].inv_mass;
            if inv_mass <= 0.0 {
                continue;
            }
            let b_velocity = self.bodies[b_idx].velocity;
            let b_is_kinematic = self.bodies[b_idx].is_kinematic();

            let point = &mut m.points[0];
            let n = point.normal;
            let t = vector(-n.y, n.x);

            let mut vrel = self.bodies[a_idx].velocity;
            if b_is_kinematic {
                vrel -= b_velocity;
            }

            // Normal constraint: only resists approach (vn < 0), never
            // pulls bodies together.
            let vn = vrel.dot(&n);
            if vn < 0.0 {
                let d_pn = -vn / inv_mass;
                let pn_new = (point.pn + d_pn).max(0.0);
                let applied = pn_new - point.pn;
                point.pn = pn_new;
                self.bodies[a_idx].velocity += n * (applied * inv_mass);
            }

            // Friction: single Coulomb-cone clamp at point 0, one solver
            // iteration, reusing the same `vrel` computed above for the
            // normal constraint rather than recomputing it.
            let vt = vrel.dot(&t);
            let d_pt = -vt / inv_mass;
            let max_pt = crate::math::FRICTION * point.pn;
            let pt_new = (point.pt + d_pt).clamp(-max_pt, max_pt);
            let applied_t = pt_new - point.pt;
            point.pt = pt_new;
            self.bodies[a_idx].velocity += t * (applied_t * inv_mass);
        }
    }

    /// Split-impulse position correction: accumulates a pseudo-velocity
    /// proportional to penetration into the Dynamic body, without touching
    /// its real velocity.
    fn solve_split_impulse(&mut self, dt: Real) {
        if dt <= 0.0 {
            return;
        }
        for m in &self.manifolds {
            if m.point_count == 0 {
                continue;
            }
            let point = &m.points[0];
            if point.penetration <= 0.0 {
                continue;
            }

            let Some(a_idx) = self.bodies.iter().position(|b| b.id == m.body_a) else {
                continue;
            };
            if !self.bodies[a_idx].is_dynamic() {
                continue;
            }
            let inv_mass = self.bodies[a_idx].inv_mass;
            if inv_mass <= 0.0 {
                continue;
            }

            let lambda = point.penetration / (dt * inv_mass);
            self.bodies[a_idx].pseudo_velocity += point.normal * (lambda * inv_mass);
        }
    }

    /// Applies and resets the pseudo-velocity accumulated by
    /// `solve_split_impulse` — the step that keeps position correction from
    /// leaking into next frame's real velocity.
    fn integrate_pseudo(&mut self, dt: Real) {
        for b in &mut self.bodies {
            if b.inv_mass > 0.0 {
                b.position += b.pseudo_velocity * dt;
                b.pseudo_velocity = zero();
            }
        }
    }
}
