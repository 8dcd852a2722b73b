//! Menu GraphQL: categories and dishes held in memory, served over axum.

pub mod config;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{load_from_env, load_with, IdStrategy, ServerConfig, UpdatePolicy};
pub use error::{AppError, ConfigError};
pub use graphql::{build_schema, schema_sdl, MenuSchema, MutationRoot, QueryRoot};
pub use model::{Category, Dish, NewDish};
pub use routes::{app, common_routes_with_ready, graphql_routes};
pub use service::{CrudService, DishPatch, FieldUpdate};
pub use state::AppState;
pub use store::{MenuData, MenuStore};
