//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod notifier;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use notifier::TracingNotifier;
pub use test_dependencies::{MockNotifier, TestDependencies};
pub use traits::*;
