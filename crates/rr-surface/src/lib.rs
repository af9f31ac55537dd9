//! `rr-surface` — the bounded plane agents move on.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`surface`]   | `Surface` — bounds + insertion-ordered agents             |
//! | [`occupancy`] | `Occupancy` — per-step view excluding the moving agent    |
//! | [`error`]     | `SurfaceError`, `SurfaceResult<T>`                        |
//!
//! # Invariants
//!
//! - Every agent stands inside `[0, max_x] x [0, max_y]`.
//! - No two agents share a coordinate.
//! - Agents enter only through [`Surface::place_agent`], which validates
//!   first; their `AgentId` is their insertion index.

pub mod error;
pub mod occupancy;
pub mod surface;


pub use error::{SurfaceError, SurfaceResult};
pub use occupancy::Occupancy;
pub use surface::Surface;
