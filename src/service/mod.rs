//! CrudService: menu CRUD over the entity store, plus the dish merge rules.

mod crud;
pub mod merge;
pub use crud::CrudService;
pub use merge::{DishPatch, FieldUpdate};
