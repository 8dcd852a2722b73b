//! Typed errors and GraphQL mapping.

use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {var}: '{value}' (expected {expected})")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("{kind} not found")]
    NotFound { kind: &'static str, id: String },
    #[error("validation: {0}")]
    Validation(String),
    #[error("store: {0}")]
    State(String),
}

impl AppError {
    pub fn category_not_found(id: &str) -> Self {
        AppError::NotFound {
            kind: "Category",
            id: id.to_string(),
        }
    }

    pub fn dish_not_found(id: &str) -> Self {
        AppError::NotFound {
            kind: "Dish",
            id: id.to_string(),
        }
    }

    /// Value placed in `extensions.code` of the GraphQL error.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::Validation(_) => "BAD_USER_INPUT",
            AppError::State(_) => "INTERNAL",
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            if let AppError::NotFound { id, .. } = self {
                e.set("id", id.as_str());
            }
        })
    }
}
