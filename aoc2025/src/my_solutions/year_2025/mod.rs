pub mod day_5;
pub mod day_9;
