pub mod backend;
pub mod logging;
pub mod pipeline;
pub mod prompt;
pub mod roles;

pub use backend::{ChatBackend, Completion, GenaiBackend};
pub use logging::RunLogger;
pub use pipeline::{ReviewChain, ReviewNotes, load_request};
pub use prompt::ReviewRequest;
pub use roles::{Role, RoleModels};
