pub(crate) mod error;
pub(crate) mod project_patch;
#[allow(clippy::module_inception)]
pub(crate) mod tracker;

pub use error::{CliError, Result as CliResult};
pub use project_patch::ProjectPatch;
pub use tracker::{Tracker, TrackerSettings};
