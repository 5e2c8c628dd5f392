pub mod manager;
pub mod memory;
pub mod models;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryAdminStore;
pub use models::AdminRecord;
pub use repository::{AdminStore, PgAdminStore};
