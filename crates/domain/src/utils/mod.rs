//! Pure helper functions shared by every layer

pub mod display;
pub mod hours;
pub mod phone;
pub mod time;
