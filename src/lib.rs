//! A model of pairwise meetings between agents carrying a health condition
//!
//! The central operation is [`meetup`](crate::meetup::meetup), which takes an
//! ordered listing of agents and produces the listing that results from one
//! round of pairwise meetings. The model decomposes into a small set of pure
//! functions:
//! * A partitioner that splits the listing into participants (agents whose
//!   condition can change through contact) and non-participants.
//! * A meeting resolver that processes participants in consecutive pairs and
//!   applies the outcome of each meeting.
//! * The `improve` and `worsen` rule tables on [`Condition`] that move an
//!   agent one step along the severity axis.
//!
//! Agents are immutable value records; a meeting never mutates one in place
//! but replaces it with a fresh record carrying the updated condition.

pub mod agent;
pub mod condition;
pub mod error;
pub mod log;
pub mod meetup;
pub mod prelude;
pub mod tabulator;

pub use agent::Agent;
pub use condition::Condition;
pub use error::MeetupError;
pub use meetup::{meetup, meetup_rounds, partition};
pub use tabulator::tabulate_conditions;
