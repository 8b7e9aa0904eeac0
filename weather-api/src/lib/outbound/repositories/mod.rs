pub mod item;
pub mod user;

pub use item::PostgresItemRepository;
pub use user::PostgresUserRepository;
