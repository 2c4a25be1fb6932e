/// Sort-and-truncate helper used to build chart input.
pub mod window;
