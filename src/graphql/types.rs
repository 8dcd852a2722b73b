//! GraphQL object types and their relational fields.

use async_graphql::{ComplexObject, Context, ErrorExtensions, Result, SimpleObject, ID};

use crate::model;
use crate::service::CrudService;

use super::store;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Category", complex)]
pub struct CategoryObject {
    pub id: ID,
    pub name: String,
}

#[ComplexObject]
impl CategoryObject {
    /// Dishes whose categoryId is this category's id.
    async fn dishes(&self, ctx: &Context<'_>) -> Result<Vec<DishObject>> {
        let dishes = CrudService::dishes_by_category(store(ctx)?, &self.id).map_err(|e| e.extend())?;
        Ok(dishes.into_iter().map(DishObject::from).collect())
    }
}

impl From<model::Category> for CategoryObject {
    fn from(c: model::Category) -> Self {
        Self {
            id: ID(c.id),
            name: c.name,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Dish", complex)]
pub struct DishObject {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    #[graphql(skip)]
    pub category_id: String,
}

#[ComplexObject]
impl DishObject {
    /// The referenced category, or null when the reference is dangling.
    async fn category(&self, ctx: &Context<'_>) -> Result<Option<CategoryObject>> {
        let category = CrudService::category(store(ctx)?, &self.category_id).map_err(|e| e.extend())?;
        Ok(category.map(CategoryObject::from))
    }
}

impl From<model::Dish> for DishObject {
    fn from(d: model::Dish) -> Self {
        Self {
            id: ID(d.id),
            name: d.name,
            description: d.description,
            price: d.price,
            category_id: d.category_id,
        }
    }
}
