pub mod generation;
pub mod seeding;
