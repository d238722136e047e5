use super::*;

mod database_operations;
mod http_api;
mod summary_export;
