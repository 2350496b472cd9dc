mod attachment_type;
mod bucket_name;
mod media_type;
mod object_key;

pub use attachment_type::AttachmentType;
pub use bucket_name::BucketName;
pub use media_type::MediaType;
pub use object_key::ObjectKey;
