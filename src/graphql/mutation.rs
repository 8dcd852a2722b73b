use async_graphql::{Context, ErrorExtensions, MaybeUndefined, Object, Result, ID};

use crate::config::UpdatePolicy;
use crate::model::NewDish;
use crate::service::{CrudService, DishPatch};

use super::store;
use super::types::{CategoryObject, DishObject};

#[derive(Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    async fn create_category(&self, ctx: &Context<'_>, name: String) -> Result<CategoryObject> {
        let category = CrudService::create_category(store(ctx)?, name).map_err(|e| e.extend())?;
        Ok(category.into())
    }

    /// Replaces the category's name. Fails with NOT_FOUND for an unknown id.
    async fn update_category(&self, ctx: &Context<'_>, id: ID, name: String) -> Result<CategoryObject> {
        let category = CrudService::update_category(store(ctx)?, &id, name).map_err(|e| e.extend())?;
        Ok(category.into())
    }

    /// Removes the category and returns it. Its dishes are kept.
    async fn delete_category(&self, ctx: &Context<'_>, id: ID) -> Result<CategoryObject> {
        let category = CrudService::delete_category(store(ctx)?, &id).map_err(|e| e.extend())?;
        Ok(category.into())
    }

    async fn create_dish(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: Option<String>,
        price: f64,
        category_id: ID,
    ) -> Result<DishObject> {
        let new = NewDish {
            name,
            description,
            price,
            category_id: category_id.0,
        };
        let dish = CrudService::create_dish(store(ctx)?, new).map_err(|e| e.extend())?;
        Ok(dish.into())
    }

    /// Partial update. Which arguments count as supplied depends on the server's update policy.
    async fn update_dish(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: MaybeUndefined<String>,
        description: MaybeUndefined<String>,
        price: MaybeUndefined<f64>,
        category_id: MaybeUndefined<ID>,
    ) -> Result<DishObject> {
        let policy = ctx.data_opt::<UpdatePolicy>().copied().unwrap_or_default();
        let patch = DishPatch {
            name: name.into(),
            description: description.into(),
            price: price.into(),
            category_id: category_id.map_value(|id| id.0).into(),
        };
        let dish = CrudService::update_dish(store(ctx)?, &id, patch, policy).map_err(|e| e.extend())?;
        Ok(dish.into())
    }

    async fn delete_dish(&self, ctx: &Context<'_>, id: ID) -> Result<DishObject> {
        let dish = CrudService::delete_dish(store(ctx)?, &id).map_err(|e| e.extend())?;
        Ok(dish.into())
    }
}
