/// Template adapters - built-in and directory-backed template sources
mod directory;
mod embedded;

pub use directory::DirectoryTemplates;
pub use embedded::EmbeddedTemplates;
