//! The generated Swift artifacts, one type per file.

/// Directory below the project root holding model classes
pub const MODELS_DIR: &str = "Models";

/// Directory below the project root holding migrations
pub const MIGRATIONS_DIR: &str = "Migrations";

/// Directory below the project root holding controllers
pub const CONTROLLERS_DIR: &str = "Controllers";

mod controller;
mod migration;
mod model;

pub use controller::ControllerSwift;
pub use migration::MigrationSwift;
pub use model::ModelSwift;
