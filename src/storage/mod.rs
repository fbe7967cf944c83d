//! Plan file storage
//!
//! Plans are read from and written to JSON or YAML files, chosen by file
//! extension. Writes are atomic.

pub mod plan_file;

pub use plan_file::{read_plan, write_atomic, write_plan_atomic, PlanFormat};
