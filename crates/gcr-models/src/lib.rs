#![deny(missing_docs)]

//! # GCR Models
//!
//! Data types, codec and validator for GCR (General aviation Clearance
//! Request) slot-coordination messages exchanged between aircraft operators
//! and airport slot coordinators.
//!
//! ## Message hierarchy
//!
//! ```text
//! Message
//! ├── Header (/FLT | /REG, coordinated airport)
//! ├── AirportSection*
//! │   └── FlightLine+ (action code, identifier, date, seats, type,
//! │                    routing, flight type, slot id?)
//! ├── Footnote* (SI | GI)
//! └── MessageType (request | reply | mixed)
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`airport`] | `ICAOAirportCode` newtype |
//! | [`codes`] | Action codes, flight types, identifier types, months |
//! | [`message`] | `Message` tree |
//! | [`decode`](mod@decode) | GCR text → `Message` |
//! | [`encode`](mod@encode) | `Message` → GCR text |
//! | [`validate`](mod@validate) | Field-level checks over a `Message` |
//! | [`message_builder`] | Fluent construction of owner requests |
//! | [`error`] | `ParseError`, `ModelError` |

pub mod airport;
pub mod codes;
pub mod decode;
pub mod encode;
pub mod error;
pub mod message;
pub mod message_builder;
mod shape;
pub mod validate;

// Re-export all public types at crate root for convenience.
// Downstream crates can use `gcr_models::FlightLine` directly.
pub use airport::*;
pub use codes::*;
pub use decode::decode;
pub use encode::{encode, encode_flight_line};
pub use error::*;
pub use message::*;
pub use message_builder::*;
pub use validate::{validate, ValidationError, ValidationResult};
