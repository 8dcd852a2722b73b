//! Menu CRUD against the in-memory store.

use crate::config::UpdatePolicy;
use crate::error::AppError;
use crate::model::{Category, Dish, NewDish};
use crate::service::merge::DishPatch;
use crate::store::MenuStore;

pub struct CrudService;

impl CrudService {
    /// All categories in collection order.
    pub fn categories(store: &MenuStore) -> Result<Vec<Category>, AppError> {
        store.read(|m| m.categories().to_vec())
    }

    /// First category with `id`, or None.
    pub fn category(store: &MenuStore, id: &str) -> Result<Option<Category>, AppError> {
        let found = store.read(|m| m.find_category(id).cloned())?;
        tracing::debug!(id = %id, found = found.is_some(), "category lookup");
        Ok(found)
    }

    /// Dishes referencing `category_id`, in collection order. The category itself need not exist.
    pub fn dishes_by_category(store: &MenuStore, category_id: &str) -> Result<Vec<Dish>, AppError> {
        store.read(|m| m.dishes_in(category_id).cloned().collect())
    }

    pub fn create_category(store: &MenuStore, name: String) -> Result<Category, AppError> {
        let category = store.write(|m| m.push_category(name))?;
        tracing::info!(id = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    /// Replace the category wholesale with `{id, name}`.
    pub fn update_category(store: &MenuStore, id: &str, name: String) -> Result<Category, AppError> {
        let updated = store.write(|m| -> Result<Category, AppError> {
            let pos = m.category_position(id).ok_or_else(|| AppError::category_not_found(id))?;
            let category = Category {
                id: id.to_string(),
                name,
            };
            m.replace_category(pos, category.clone());
            Ok(category)
        })?;
        log_outcome("category updated", id, &updated);
        updated
    }

    /// Remove and return the category. Dishes pointing at it are left dangling.
    pub fn delete_category(store: &MenuStore, id: &str) -> Result<Category, AppError> {
        let removed = store.write(|m| -> Result<Category, AppError> {
            let pos = m.category_position(id).ok_or_else(|| AppError::category_not_found(id))?;
            Ok(m.remove_category(pos))
        })?;
        log_outcome("category deleted", id, &removed);
        removed
    }

    pub fn create_dish(store: &MenuStore, new: NewDish) -> Result<Dish, AppError> {
        let dish = store.write(|m| m.push_dish(new))?;
        tracing::info!(id = %dish.id, category_id = %dish.category_id, "dish created");
        Ok(dish)
    }

    /// Merge `patch` into the dish per `policy` and replace it in place.
    pub fn update_dish(
        store: &MenuStore,
        id: &str,
        patch: DishPatch,
        policy: UpdatePolicy,
    ) -> Result<Dish, AppError> {
        let updated = store.write(|m| -> Result<Dish, AppError> {
            let pos = m.dish_position(id).ok_or_else(|| AppError::dish_not_found(id))?;
            let dish = patch.apply(&m.dishes()[pos], policy)?;
            m.replace_dish(pos, dish.clone());
            Ok(dish)
        })?;
        log_outcome("dish updated", id, &updated);
        updated
    }

    pub fn delete_dish(store: &MenuStore, id: &str) -> Result<Dish, AppError> {
        let removed = store.write(|m| -> Result<Dish, AppError> {
            let pos = m.dish_position(id).ok_or_else(|| AppError::dish_not_found(id))?;
            Ok(m.remove_dish(pos))
        })?;
        log_outcome("dish deleted", id, &removed);
        removed
    }
}

fn log_outcome<T>(action: &str, id: &str, result: &Result<T, AppError>) {
    match result {
        Ok(_) => tracing::info!(id = %id, "{}", action),
        Err(e) => tracing::warn!(id = %id, error = %e, "{} failed", action),
    }
}
