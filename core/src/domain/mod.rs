pub mod analysis;
pub mod captions;
pub mod common;
pub mod pantry;
pub mod settings;
