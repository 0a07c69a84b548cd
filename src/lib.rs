pub mod content;
pub mod core;
pub mod gui;
pub mod persistence;
