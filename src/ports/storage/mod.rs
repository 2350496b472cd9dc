mod oss_session;

pub use oss_session::{OssSession, OssSessionFactory, PutReceipt, SessionGuard};
