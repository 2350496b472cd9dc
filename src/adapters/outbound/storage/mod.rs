// Infrastructure error mapping
pub mod error;

// Session implementations
pub mod in_memory;
pub mod object_store_session;

// Provider-specific implementations
pub mod aliyun;

// Re-export key types
pub use aliyun::AliyunSessionFactory;
pub use in_memory::InMemorySessionFactory;
pub use object_store_session::ObjectStoreSession;
