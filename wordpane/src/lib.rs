pub mod action;
pub mod app;
pub mod components;
pub mod model;
pub mod theme;
pub mod tui;
pub mod utilities;
