pub mod components;
pub mod config;
pub mod controller;
pub mod hooks;
pub mod models;
pub mod services;
pub mod utils;
pub mod view;
