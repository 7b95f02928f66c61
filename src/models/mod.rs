pub mod generation;
pub mod recipe;
