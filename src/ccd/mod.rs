//! Continuous collision detection — the "did anything tunnel" half of
//! the core.

pub mod toi;

pub use toi::{solve_toi_1d, Toi};
