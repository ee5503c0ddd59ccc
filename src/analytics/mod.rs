pub mod achievements;
pub mod engine;
pub mod insights;
pub mod keywords;
pub mod practice;
pub mod streaks;
pub mod temporal;
