pub const MAX_FILES: usize = 10;
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_WEBHOOK_URL: &'static str = "http://localhost:5678/webhook/upload-file";
pub const DEFAULT_FORWARD_TIMEOUT_SECS: u64 = 30;

/// Multipart field names shared by the inbound form and the outbound webhook body.
pub const FILES_FIELD: &'static str = "files";
pub const TOTAL_FILES_FIELD: &'static str = "totalFiles";
pub const TIMESTAMP_FIELD: &'static str = "timestamp";
