pub mod app;
pub mod config;
pub mod data;
pub mod errors;
pub mod model;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
