//! Configuration system for Herald

pub mod defaults;
mod inputs;
mod loader;
mod types;
pub mod validation;

pub use defaults::*;
pub use inputs::*;
pub use loader::*;
pub use types::*;
pub use validation::*;
