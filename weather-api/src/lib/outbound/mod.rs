pub mod repositories;
pub mod weather;
