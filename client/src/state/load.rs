//! Page-load status for route-level data.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use gateway::ApiError;

/// Initial-load state of a page. `Failed` renders as a blocking panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Load<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Load<T> {
    /// Convert a call result, rendering errors with `message`.
    pub fn from_result(result: Result<T, ApiError>, message: impl Fn(&ApiError) -> String) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(message(&e)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
