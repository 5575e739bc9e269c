// Presentation layer - HTTP surface and view rendering
pub mod app_state;
pub mod handlers;
pub mod view;
