pub mod audit;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod session;
pub mod store;
pub mod templates_structs;
pub mod validate;
