//! `rr-agent` — the per-agent state machine for the `rust_rover` simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`spec`]      | `AgentSpec` — an agent as decoded, before placement       |
//! | [`validator`] | `PositionValidator` trait (bounds + occupancy capability) |
//! | [`agent`]     | `Agent`, `AgentState`                                     |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                            |
//!
//! # Design notes
//!
//! An agent never owns or points at the surface it stands on.  Every
//! operation that needs to check a position takes a
//! [`PositionValidator`] argument instead, so the surface can lend a view of
//! "everyone else" for exactly one step without any cyclic ownership.

pub mod agent;
pub mod error;
pub mod spec;
pub mod validator;


pub use agent::{Agent, AgentState};
pub use error::{AgentError, AgentResult};
pub use spec::AgentSpec;
pub use validator::PositionValidator;
