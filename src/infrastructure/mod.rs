pub mod database;
pub mod generation;
pub mod repositories;
pub mod scheduler;
pub mod seed_corpus;
