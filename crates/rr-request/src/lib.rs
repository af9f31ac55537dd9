//! `rr-request` — wire format for the rust_rover simulator.
//!
//! # Request format
//!
//! ```text
//! 5 5          ← top-right corner of the surface
//! 1 2 N        ← agent 0: x y heading
//! LFLFLFLFF    ← agent 0: program
//! 3 3 E        ← agent 1 …
//! FFRFFRFRRF
//! ```
//!
//! Headings are `N E S W`; instructions are `L`, `R`, and the move-forward
//! letter selected by [`MoveSymbol`][rr_core::MoveSymbol] (`F` by default,
//! `M` for older request corpora).
//!
//! # Response format
//!
//! One `x y H` line per agent in input order.  Round-robin runs prefix a
//! `DONE` or `FAILED` status line; sequential runs do not.
//!
//! # Crate layout
//!
//! | Module      | Contents                                         |
//! |-------------|--------------------------------------------------|
//! | [`request`] | `Request`                                        |
//! | [`decode`]  | `decode`, `load`                                 |
//! | [`encode`]  | `encode`, `encode_request`                       |
//! | [`respond`] | `respond`, `respond_with`: decode, run, encode   |
//! | [`error`]   | `RequestError`, `RequestResult<T>`               |

pub mod decode;
pub mod encode;
pub mod error;
pub mod request;
pub mod respond;


pub use decode::{decode, load};
pub use encode::{encode, encode_request};
pub use error::{RequestError, RequestResult};
pub use request::Request;
pub use respond::{respond, respond_with};
