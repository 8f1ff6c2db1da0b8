//! Pizza API: restaurants, pizzas, and the prices restaurants charge for them, over HTTP.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod seed;
pub mod serializer;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::{apply_schema, ensure_database_exists};
pub use routes::{api_routes, app, common_routes, ApiDoc};
pub use seed::seed_demo_data;
pub use service::{CrudService, Price, ValidationError};
pub use state::AppState;
pub use store::{MemoryStore, PgStore, Store, StoreError};
