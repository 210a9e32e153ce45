pub mod database;
pub mod extract;
pub mod validation;
