//! Running backends over a loaded schema.

mod driver;

pub use driver::{BackendOutput, generate_all};
