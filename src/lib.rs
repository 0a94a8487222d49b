pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod game;
pub mod generator;
pub mod loader;
pub mod model;
pub mod offline;
pub mod presenter;
pub mod results;
pub mod ui;

pub use app::QuizApp;
