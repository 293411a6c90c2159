//! Pipeline module - table model, scaling, encoding, and selection steps

pub mod encoding;
pub mod error;
pub mod loader;
pub mod scaling;
pub mod selection;
pub mod table;

pub use encoding::*;
pub use error::*;
pub use loader::*;
pub use scaling::*;
pub use selection::*;
pub use table::*;
