use alloc::boxed::Box;
use alloc::string::{String, ToString};

/// A fault raised while rendering a subtree.
///
/// Renderers return this from [`crate::Render::render`]; panics caught by
/// [`crate::FaultBoundary`] are converted into it as well.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct RenderFault {
    message: String,
    #[source]
    source: Option<Box<dyn core::error::Error + Send + Sync + 'static>>,
}

impl RenderFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps an underlying error, keeping it reachable through `source()`.
    pub fn from_error(error: impl core::error::Error + Send + Sync + 'static) -> Self {
        Self {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }

    /// Builds a fault from a caught panic payload.
    #[cfg(feature = "std")]
    pub fn from_panic(payload: &(dyn core::any::Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            String::from("render panicked")
        };
        Self::new(message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors produced while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[cfg(feature = "json")]
    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate item id {0}")]
    DuplicateId(u64),
}
