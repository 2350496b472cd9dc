mod aliyun_file_handler;
mod file_handlers;

pub use aliyun_file_handler::AliyunFileHandler;
pub use file_handlers::FileHandlers;
