pub mod data;
pub mod logging;
pub mod models;
pub mod ui;
