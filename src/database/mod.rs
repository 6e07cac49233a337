pub mod connection;
pub mod matches;
pub mod players;
pub mod repository;
pub mod setup;
pub mod store;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use repository::Repository;
pub use store::SqliteRepository;
