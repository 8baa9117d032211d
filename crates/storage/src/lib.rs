pub mod credential;
pub mod error;
pub mod memory;
pub mod path;
pub mod rtdb;
pub mod store;

pub use credential::ServiceCredential;
pub use error::{Result, StorageError};
pub use memory::MemoryDb;
pub use path::DbPath;
pub use rtdb::RtdbClient;
pub use store::Database;
