pub mod render;
pub mod spam;
