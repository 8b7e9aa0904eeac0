pub mod item;
pub mod page;
pub mod user;
pub mod weather;

pub use page::Page;
