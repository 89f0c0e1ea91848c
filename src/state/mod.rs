//! Application state module

mod forms;
mod image_loader;
mod preview;
mod record;

pub use forms::*;
pub use image_loader::*;
pub use preview::*;
pub use record::*;
