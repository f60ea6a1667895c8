//! Rigid body state and the shapes it can carry.

use crate::math::{vector, zero, Real, Vector2};

/// A body's identifier. Assigned by the host and never reused — the world
/// never generates one itself.
pub type BodyId = u32;

/// Sentinel used by [`ContactManifold::default`][crate::geometry::ContactManifold]
/// for "not yet pointing at a real body", recovered from
/// `original_source/tests/test_body.cpp`'s `ContactManifold.DefaultValues`.
pub const NO_BODY: BodyId = u32::MAX;

/// How a body participates in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    /// Responds to forces and constraints; the only type the solver ever
    /// writes velocity/position corrections into.
    Dynamic,
    /// `inv_mass = 0`, never moves, never has a velocity.
    Static,
    /// Moves by scripted velocity, ignores forces, has `inv_mass = 0` for
    /// solver purposes but is swept as a moving wall by CCD.
    Kinematic,
}

/// The only two shapes this core understands: no rotation, no polygons,
/// no circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeType {
    /// Axis-aligned box, extents given by `Body::half_width`/`half_height`.
    Box,
    /// A horizontal line of infinite extent at `Body::position.y`.
    Plane,
}

/// A physical entity: kinematic state, inverse mass, AABB half-extents,
/// shape tag, and the ground flag CCD/`solve_y` maintain.
///
/// `Body` is a plain value type (`Copy`) by design: contiguous arrays of
/// value types, no pointer indirection, which also lets the per-wall CCD
/// loop copy a body out, mutate it against read-only wall data, and write
/// it back without fighting the borrow checker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub body_type: BodyType,
    pub position: Vector2,
    pub velocity: Vector2,
    pub acceleration: Vector2,
    /// Scratch velocity accumulated by `solve_split_impulse` and consumed
    /// by `integrate_pseudo`; zero at every frame boundary.
    pub pseudo_velocity: Vector2,
    pub inv_mass: Real,
    pub half_width: Real,
    pub half_height: Real,
    pub shape: ShapeType,
    pub on_ground: bool,
}

impl Body {
    /// A body isn't solved against or swept as a wall unless both of these
    /// agree with its declared type — kept as a single predicate so the
    /// pipeline and the solver can't drift out of sync on what "dynamic"
    /// means.
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.body_type == BodyType::Dynamic
    }

    #[inline]
    pub fn is_kinematic(&self) -> bool {
        self.body_type == BodyType::Kinematic
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.body_type == BodyType::Static
    }

    /// `bottom(b) = position.y - half_height`, used by ground/platform
    /// resolution.
    #[inline]
    pub fn bottom(&self) -> Real {
        self.position.y - self.half_height
    }
}

/// Builder for [`Body`]. Construction always goes through a builder rather
/// than a bare struct literal at the call site.
#[derive(Debug, Clone, Copy)]
pub struct BodyBuilder {
    body: Body,
}

impl BodyBuilder {
    fn blank(id: BodyId, body_type: BodyType, shape: ShapeType) -> Self {
        Self {
            body: Body {
                id,
                body_type,
                position: zero(),
                velocity: zero(),
                acceleration: zero(),
                pseudo_velocity: zero(),
                inv_mass: 0.0,
                half_width: 0.0,
                half_height: 0.0,
                shape,
                on_ground: false,
            },
        }
    }

    /// A dynamic axis-aligned box with the given mass (`inv_mass = 1/mass`).
    #[must_use]
    pub fn dynamic_box(id: BodyId, mass: Real, half_width: Real, half_height: Real) -> Self {
        let mut b = Self::blank(id, BodyType::Dynamic, ShapeType::Box);
        debug_assert!(mass > 0.0, "a dynamic body needs positive mass");
        b.body.inv_mass = 1.0 / mass;
        b.body.half_width = half_width;
        b.body.half_height = half_height;
        b
    }

    /// A static axis-aligned box wall. `inv_mass` is always 0.
    #[must_use]
    pub fn static_box(id: BodyId, half_width: Real, half_height: Real) -> Self {
        let mut b = Self::blank(id, BodyType::Static, ShapeType::Box);
        b.body.half_width = half_width;
        b.body.half_height = half_height;
        b
    }

    /// A kinematic axis-aligned box driven by scripted velocity.
    #[must_use]
    pub fn kinematic_box(id: BodyId, half_width: Real, half_height: Real) -> Self {
        let mut b = Self::blank(id, BodyType::Kinematic, ShapeType::Box);
        b.body.half_width = half_width;
        b.body.half_height = half_height;
        b
    }

    /// A static horizontal plane (platform or ground marker) at `height`.
    #[must_use]
    pub fn plane(id: BodyId, height: Real) -> Self {
        let mut b = Self::blank(id, BodyType::Static, ShapeType::Plane);
        b.body.position = vector(0.0, height);
        b
    }

    #[must_use]
    pub fn position(mut self, position: Vector2) -> Self {
        self.body.position = position;
        self
    }

    #[must_use]
    pub fn velocity(mut self, velocity: Vector2) -> Self {
        self.body.velocity = velocity;
        self
    }

    #[must_use]
    pub fn acceleration(mut self, acceleration: Vector2) -> Self {
        self.body.acceleration = acceleration;
        self
    }

    #[must_use]
    pub fn build(self) -> Body {
        self.body
    }
}
