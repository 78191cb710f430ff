/// Application services shared by several use cases
mod template_store;

pub use template_store::{TemplateStore, MODEL_PLACEHOLDER};
