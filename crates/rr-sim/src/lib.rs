//! `rr-sim` — the simulation driver for the rust_rover grid simulator.
//!
//! # Round-robin loop (canonical policy)
//!
//! ```text
//! round = 0
//! loop:
//!   round += 1
//!   for agent in insertion order:
//!     step_agent(agent)
//!       Ok                    → progress += 1
//!       Exhausted / blocked   → agent sits this round out
//!       anything else         → abort the run
//!   if progress == 0: stop
//! status = FAILED if any agent has pending instructions, else DONE
//! ```
//!
//! Every round with progress advances at least one cursor, and cursors are
//! bounded by program length, so a run takes at most
//! `sum(program lengths) + 1` rounds.  Tolerating blocked moves lets an agent
//! wait for another one to move out of its way instead of deadlocking on
//! encounter order.
//!
//! # Sequential loop (alternate policy)
//!
//! Each agent runs its whole program before the next one starts; the first
//! rejected move aborts the run with an error.  Each agent's run is reported
//! to observers as one round.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rr_core::{Coordinate, Policy};
//! use rr_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(Coordinate::new(5, 5))
//!     .policy(Policy::RoundRobin)
//!     .agents(specs)
//!     .build()?;
//! let outcome = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod outcome;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use outcome::{Outcome, RunStatus};
pub use sim::Sim;
