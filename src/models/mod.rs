pub mod mood_event;
pub mod practice;
pub mod report;
