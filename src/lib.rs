pub mod decode;
pub mod model;
pub mod observability;
pub mod resolver;
pub mod schedule;
pub mod snapshot;
pub mod timeslot;
pub mod wizard;
