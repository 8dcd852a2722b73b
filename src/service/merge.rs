//! Partial-update merge for dishes.

use crate::config::UpdatePolicy;
use crate::error::AppError;
use crate::model::Dish;

/// One argument of a partial update: omitted, explicitly null, or a value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FieldUpdate<T> {
    #[default]
    Absent,
    Null,
    Set(T),
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => FieldUpdate::Set(v),
            None => FieldUpdate::Absent,
        }
    }
}

impl<T> From<async_graphql::MaybeUndefined<T>> for FieldUpdate<T> {
    fn from(v: async_graphql::MaybeUndefined<T>) -> Self {
        match v {
            async_graphql::MaybeUndefined::Undefined => FieldUpdate::Absent,
            async_graphql::MaybeUndefined::Null => FieldUpdate::Null,
            async_graphql::MaybeUndefined::Value(v) => FieldUpdate::Set(v),
        }
    }
}

/// Values a loose truthiness check treats as "not supplied".
pub trait Falsy {
    fn is_falsy(&self) -> bool;
}

impl Falsy for String {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for f64 {
    fn is_falsy(&self) -> bool {
        *self == 0.0 || self.is_nan()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DishPatch {
    pub name: FieldUpdate<String>,
    pub description: FieldUpdate<String>,
    pub price: FieldUpdate<f64>,
    pub category_id: FieldUpdate<String>,
}

impl DishPatch {
    /// Build the replacement record for `existing`. The id is always kept.
    pub fn apply(self, existing: &Dish, policy: UpdatePolicy) -> Result<Dish, AppError> {
        Ok(match policy {
            UpdatePolicy::Falsy => Dish {
                id: existing.id.clone(),
                name: or_existing(self.name, &existing.name),
                description: match self.description {
                    FieldUpdate::Set(v) if !v.is_falsy() => Some(v),
                    _ => existing.description.clone(),
                },
                price: or_existing(self.price, &existing.price),
                category_id: or_existing(self.category_id, &existing.category_id),
            },
            UpdatePolicy::Presence => Dish {
                id: existing.id.clone(),
                name: required(self.name, &existing.name, "name")?,
                description: match self.description {
                    FieldUpdate::Absent => existing.description.clone(),
                    FieldUpdate::Null => None,
                    FieldUpdate::Set(v) => Some(v),
                },
                price: required(self.price, &existing.price, "price")?,
                category_id: required(self.category_id, &existing.category_id, "categoryId")?,
            },
        })
    }
}

fn or_existing<T: Falsy + Clone>(update: FieldUpdate<T>, existing: &T) -> T {
    match update {
        FieldUpdate::Set(v) if !v.is_falsy() => v,
        _ => existing.clone(),
    }
}

fn required<T: Clone>(update: FieldUpdate<T>, existing: &T, field: &str) -> Result<T, AppError> {
    match update {
        FieldUpdate::Absent => Ok(existing.clone()),
        FieldUpdate::Null => Err(AppError::Validation(format!("{} cannot be null", field))),
        FieldUpdate::Set(v) => Ok(v),
    }
}
