pub mod client;
pub mod loader;
pub mod seed;
