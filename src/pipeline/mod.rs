//! The frame/fixed-step entry point that owns bodies and manifolds and
//! drives them through one fixed step.

pub mod physics_world;

pub use physics_world::PhysicsWorld;
