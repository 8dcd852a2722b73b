//! Shared application state for all routes.

use crate::config::UpdatePolicy;
use crate::graphql::{build_schema, MenuSchema};
use crate::store::MenuStore;

#[derive(Clone)]
pub struct AppState {
    /// Same store the schema resolves against; read directly by `/ready`.
    pub store: MenuStore,
    pub schema: MenuSchema,
}

impl AppState {
    pub fn new(store: MenuStore, policy: UpdatePolicy) -> Self {
        let schema = build_schema(store.clone(), policy);
        Self { store, schema }
    }
}
