use alloc::format;
use alloc::string::String;

/// Environment variable read by [`PathResolver::from_env`].
pub const BASE_PATH_ENV: &str = "CAROUSEL_BASE_PATH";

/// Maps media file names to fully qualified asset paths.
///
/// Resolution is plain string concatenation: `base_path + "videos/" + file_name`. Nothing checks
/// that the file exists.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResolver {
    base_path: String,
}

impl PathResolver {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Reads the base path from `CAROUSEL_BASE_PATH`, falling back to `/`.
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        match std::env::var(BASE_PATH_ENV) {
            Ok(base_path) => Self::new(base_path),
            Err(_) => Self::default(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn resolve(&self, file_name: &str) -> String {
        format!("{}videos/{}", self.base_path, file_name)
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new("/")
    }
}
