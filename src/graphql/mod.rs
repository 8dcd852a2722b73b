//! GraphQL schema over the menu store.
//!
//! - [`QueryRoot`]: `categories`, `category(id)`, `dishes(categoryId)`
//! - [`MutationRoot`]: create/update/delete for categories and dishes
//!
//! Relational fields (`Category.dishes`, `Dish.category`) live on the object
//! types in [`types`] and read the same [`MenuStore`] from context data.

mod mutation;
mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{CategoryObject, DishObject};

use async_graphql::{Context, EmptySubscription, Schema};

use crate::config::UpdatePolicy;
use crate::store::MenuStore;

pub type MenuSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema with `store` and `policy` as context data.
pub fn build_schema(store: MenuStore, policy: UpdatePolicy) -> MenuSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .data(policy)
        .finish()
}

/// SDL text of the served schema.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

pub(crate) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a MenuStore> {
    ctx.data::<MenuStore>()
}
