pub mod adapters;
pub mod app;
pub mod core;
pub mod global_constants;
pub mod presentation;
