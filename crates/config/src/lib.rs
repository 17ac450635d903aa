pub mod env;
pub mod tracing_init;

pub use env::{AppConfig, OutputFormat, DEFAULT_BASE_URL};
pub use tracing_init::init_tracing;
