//! Body state and integration — the "what moves and how" half of the core.

pub mod body;
pub mod integrator;

pub use body::{Body, BodyBuilder, BodyId, BodyType, ShapeType, NO_BODY};
pub use integrator::{integrate_y, semi_implicit_euler};
