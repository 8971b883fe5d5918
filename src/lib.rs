pub mod api;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod ui;
pub mod web;

pub use config::Config;
