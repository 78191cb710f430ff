/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod filesystem;
pub mod templates;
