mod fs;

pub use fs::write_file;
