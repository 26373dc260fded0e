pub mod app;
pub mod config;
pub mod format;
pub mod input;
pub mod message;
pub mod render;
pub mod watch;
