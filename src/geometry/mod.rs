//! Contact representation and overlap testing — the "what is touching"
//! half of the core.

pub mod aabb;
pub mod contact;

pub use aabb::{box_overlap, contact_point, Overlap};
pub use contact::{merge_manifold, ContactManifold, ContactPoint};
