//! A deterministic, fixed-timestep 2D rigid-body physics core.
//!
//! `impulse2d` advances a world of axis-aligned boxes and horizontal planes
//! through time such that fast-moving dynamic bodies never tunnel through
//! walls (continuous collision detection), resting contacts settle without
//! drift (warm-started sequential-impulse solving), and identical inputs
//! replayed with an identical fixed timestep produce bit-identical
//! trajectories.
//!
//! The crate has no rendering, no windowing, no asset loading, and no I/O
//! of any kind — a host owns all of that and drives the simulation purely
//! through [`pipeline::PhysicsWorld::update`].
//!
//! ```
//! use impulse2d::dynamics::BodyBuilder;
//! use impulse2d::math::vector;
//! use impulse2d::pipeline::PhysicsWorld;
//!
//! let mut world = PhysicsWorld::new(1.0 / 60.0);
//! world.add_body(
//!     BodyBuilder::dynamic_box(0, 1.0, 0.5, 0.5)
//!         .position(vector(0.0, 10.0))
//!         .acceleration(vector(0.0, -9.8))
//!         .build(),
//! );
//! world.update(1.0 / 60.0);
//! assert_eq!(world.step_count(), 1);
//! ```

pub mod ccd;
pub mod dynamics;
pub mod geometry;
pub mod math;
pub mod pipeline;

pub use dynamics::{Body, BodyBuilder, BodyId, BodyType, ShapeType};
pub use geometry::{ContactManifold, ContactPoint};
pub use math::{Real, Vector2};
pub use pipeline::PhysicsWorld;
