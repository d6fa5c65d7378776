pub mod app;
pub mod components;
pub mod data;
pub mod models;
pub mod state;
pub mod utils;
pub mod validation;
