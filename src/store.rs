//! In-memory entity store: ordered category and dish collections behind one lock.

use crate::config::IdStrategy;
use crate::error::AppError;
use crate::model::{seed_categories, seed_dishes, Category, Dish, NewDish};
use std::sync::{Arc, RwLock};

/// The two collections plus id allocation state.
#[derive(Debug)]
pub struct MenuData {
    categories: Vec<Category>,
    dishes: Vec<Dish>,
    ids: IdStrategy,
    category_seq: u64,
    dish_seq: u64,
}

impl MenuData {
    pub fn new(ids: IdStrategy, categories: Vec<Category>, dishes: Vec<Dish>) -> Self {
        let category_seq = highest_numeric_id(categories.iter().map(|c| c.id.as_str()));
        let dish_seq = highest_numeric_id(dishes.iter().map(|d| d.id.as_str()));
        Self {
            categories,
            dishes,
            ids,
            category_seq,
            dish_seq,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_position(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    pub fn dish_position(&self, id: &str) -> Option<usize> {
        self.dishes.iter().position(|d| d.id == id)
    }

    /// Dishes whose `category_id` equals `category_id`, in collection order.
    pub fn dishes_in<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a Dish> + 'a {
        self.dishes.iter().filter(move |d| d.category_id == category_id)
    }

    pub fn push_category(&mut self, name: String) -> Category {
        let id = next_id(self.ids, self.categories.len(), &mut self.category_seq);
        let category = Category { id, name };
        self.categories.push(category.clone());
        category
    }

    pub fn push_dish(&mut self, new: NewDish) -> Dish {
        let id = next_id(self.ids, self.dishes.len(), &mut self.dish_seq);
        let dish = new.into_dish(id);
        self.dishes.push(dish.clone());
        dish
    }

    /// Panics if `pos` is out of bounds; callers pass a position from `category_position`.
    pub fn replace_category(&mut self, pos: usize, category: Category) {
        self.categories[pos] = category;
    }

    pub fn replace_dish(&mut self, pos: usize, dish: Dish) {
        self.dishes[pos] = dish;
    }

    pub fn remove_category(&mut self, pos: usize) -> Category {
        self.categories.remove(pos)
    }

    pub fn remove_dish(&mut self, pos: usize) -> Dish {
        self.dishes.remove(pos)
    }
}

fn highest_numeric_id<'a>(ids: impl Iterator<Item = &'a str>) -> u64 {
    ids.filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0)
}

fn next_id(strategy: IdStrategy, len: usize, seq: &mut u64) -> String {
    match strategy {
        IdStrategy::Length => (len + 1).to_string(),
        IdStrategy::Monotonic => {
            *seq += 1;
            seq.to_string()
        }
        IdStrategy::Uuid => uuid::Uuid::new_v4().to_string(),
    }
}

/// Cloneable handle to the process-wide menu data. Every clone shares the same collections.
#[derive(Clone, Debug)]
pub struct MenuStore {
    inner: Arc<RwLock<MenuData>>,
}

impl MenuStore {
    /// Empty collections.
    pub fn new(ids: IdStrategy) -> Self {
        Self::from_data(MenuData::new(ids, Vec::new(), Vec::new()))
    }

    /// Three categories and three dishes, one dish per category.
    pub fn seeded(ids: IdStrategy) -> Self {
        Self::from_data(MenuData::new(ids, seed_categories(), seed_dishes()))
    }

    pub fn from_data(data: MenuData) -> Self {
        Self {
            inner: Arc::new(RwLock::new(data)),
        }
    }

    /// Run `f` under the read lock. Never hold the guard across an await.
    pub fn read<R>(&self, f: impl FnOnce(&MenuData) -> R) -> Result<R, AppError> {
        let guard = self
            .inner
            .read()
            .map_err(|_| AppError::State("menu store lock poisoned".into()))?;
        Ok(f(&guard))
    }

    /// Run `f` under the write lock; the whole closure is one atomic step.
    pub fn write<R>(&self, f: impl FnOnce(&mut MenuData) -> R) -> Result<R, AppError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| AppError::State("menu store lock poisoned".into()))?;
        Ok(f(&mut guard))
    }
}
