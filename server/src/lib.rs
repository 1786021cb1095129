pub mod app_state;
pub mod http_error;
pub mod log_filter;
pub mod mime_type;
pub mod openapi;
pub mod routes;
pub mod schema;
pub mod spa_serve_dir;
