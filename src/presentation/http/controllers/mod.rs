pub mod articles;
pub mod generation;
