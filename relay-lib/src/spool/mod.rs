mod spooled_file;

pub use spooled_file::*;
