pub mod generation;
pub mod prompt;
pub mod provider;
pub mod template;
