pub mod config;
pub mod handlers;
pub mod storage;

// Re-export all port traits for convenience
pub use config::OptionSource;
pub use handlers::FileHandler;
pub use storage::{OssSession, OssSessionFactory, PutReceipt, SessionGuard};
