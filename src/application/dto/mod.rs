/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod plan_request;
mod plan_response;
mod scaffold_request;
mod scaffold_response;

pub use output_format::OutputFormat;
pub use plan_request::PlanRequest;
pub use plan_response::PlanResponse;
pub use scaffold_request::{ScaffoldRequest, DEFAULT_MODEL};
pub use scaffold_response::ScaffoldResponse;
