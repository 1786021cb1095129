pub mod catalog;
pub mod config;
pub mod model;
pub mod timeline;
