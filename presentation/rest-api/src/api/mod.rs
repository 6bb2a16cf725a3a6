pub mod club;
pub mod error;
pub mod health;
pub mod membership;
pub mod person;
pub mod tags;
pub mod university;
