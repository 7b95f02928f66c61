//! Recipe generator
//!
//! This library provides the core functionality for the recipe-generator
//! service: the request and recipe data model, the generation handler that
//! chooses between an LLM provider and a deterministic templated recipe, the
//! HTTP routes, and the form controller used by clients.

pub mod app_state;
pub mod config;
pub mod form;
pub mod models;
pub mod routes;
pub mod services;
