use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::service::CrudService;

use super::store;
use super::types::{CategoryObject, DishObject};

#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Every category, in insertion order.
    async fn categories(&self, ctx: &Context<'_>) -> Result<Vec<CategoryObject>> {
        let categories = CrudService::categories(store(ctx)?).map_err(|e| e.extend())?;
        Ok(categories.into_iter().map(CategoryObject::from).collect())
    }

    /// Category by id; null when no category has that id.
    async fn category(&self, ctx: &Context<'_>, id: ID) -> Result<Option<CategoryObject>> {
        let category = CrudService::category(store(ctx)?, &id).map_err(|e| e.extend())?;
        Ok(category.map(CategoryObject::from))
    }

    /// Dishes referencing `categoryId`.
    async fn dishes(&self, ctx: &Context<'_>, category_id: ID) -> Result<Vec<DishObject>> {
        let dishes = CrudService::dishes_by_category(store(ctx)?, &category_id).map_err(|e| e.extend())?;
        Ok(dishes.into_iter().map(DishObject::from).collect())
    }
}
