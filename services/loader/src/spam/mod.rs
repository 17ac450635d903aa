pub mod client;
pub mod loader;
pub mod models;
pub mod source;
