//! `rr-core` — foundational types for the `rust_rover` grid simulator.
//!
//! This crate is a dependency of every other `rr-*` crate.  It has no `rr-*`
//! dependencies and only `thiserror` externally, plus optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`coord`]       | `Coordinate`, `Bounds`                                |
//! | [`heading`]     | `Heading` and its rotation algebra                    |
//! | [`instruction`] | `Instruction`, `MoveSymbol`                           |
//! | [`config`]      | `RunConfig`, `Policy`                                 |
//! | [`error`]       | `CoreError`, `PositionError`, `PositionErrorKind`     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on value types and `RunConfig`   |

pub mod config;
pub mod coord;
pub mod error;
pub mod heading;
pub mod ids;
pub mod instruction;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Policy, RunConfig};
pub use coord::{Bounds, Coordinate};
pub use error::{CoreError, CoreResult, PositionError, PositionErrorKind};
pub use heading::Heading;
pub use ids::AgentId;
pub use instruction::{Instruction, MoveSymbol};
