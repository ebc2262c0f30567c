pub mod error;
pub mod meal;
