#![warn(clippy::pedantic)]

pub mod log;
pub mod notification;
pub mod scheduler;
pub mod workout;

pub use notification::Notifications;
pub use scheduler::{IntervalScheduler, Scheduler, Ticker};
pub use workout::WorkoutController;
