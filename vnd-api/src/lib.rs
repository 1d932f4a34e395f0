pub mod api;
pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod server;
pub mod services;
pub mod storage;
pub mod telemetry;

pub use config::*;
pub use errors::*;
pub use server::{ApiServer, AppState};
pub use services::VendorService;

pub use api::create_middleware_stack;
pub use bootstrap::build_api_server_from_env;
