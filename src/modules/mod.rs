pub mod home;
pub mod recipe;

mod router;
pub use router::get_router;
