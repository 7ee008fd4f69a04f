mod assembler;

pub use assembler::{write_flat, write_standard_json};
