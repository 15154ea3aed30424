//! Domain layer - Mood journal model and check-in rules

pub mod clock;
pub mod entry;
pub mod flow;
pub mod greeting;
pub mod mood;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::JournalEntry;
pub use flow::{CheckInFlow, CheckInState};
pub use greeting::Greeting;
pub use mood::Mood;
pub use store::JournalStore;
