pub mod accordion;
pub mod app;
pub mod editable_card;
pub mod error_modal;
pub mod message_overlay;
pub mod page_view;
pub mod settings;
pub mod theme;

pub use app::RetroApp;
