//! Command implementations.

pub mod check;
pub mod config;
pub mod key;
pub mod plan;
pub mod rename;
pub mod rules;
pub mod suggest;

pub use self::check::execute_check;
pub use self::config::execute_config;
pub use self::key::execute_key;
pub use self::plan::{execute_plan, execute_preview};
pub use self::rename::execute_rename;
pub use self::rules::execute_rules;
pub use self::suggest::execute_suggest;
