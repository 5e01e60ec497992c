pub use crate::agent::Agent;
pub use crate::condition::Condition;
pub use crate::error::MeetupError;
pub use crate::log::{debug, error, info, trace, warn};
pub use crate::meetup::{meetup, meetup_rounds, partition};
pub use crate::tabulator::tabulate_conditions;
