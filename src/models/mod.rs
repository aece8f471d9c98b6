pub mod alert;
pub mod reservation;
pub mod schedule;
