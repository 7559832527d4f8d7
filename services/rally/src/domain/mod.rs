pub mod clock;
pub mod payload;
pub mod repository;
pub mod types;
