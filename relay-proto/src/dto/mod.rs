mod file_kind;
mod health_dto;
mod upload_dto;

pub use file_kind::*;
pub use health_dto::*;
pub use upload_dto::*;
