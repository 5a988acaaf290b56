pub mod settings;
pub mod timer;
