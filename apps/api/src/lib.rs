pub mod ats;
pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod state;
