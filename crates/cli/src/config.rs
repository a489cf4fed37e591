use std::{fs, path::Path};

use serde::Deserialize;

use crate::input::InputError;

/// Run fields loaded from a TOML file.
///
/// ```toml
/// t0 = 0
/// tf = 160
/// dt = 0.1
/// beta = 0.3
/// gamma = 0.05
/// s0 = 999
/// i0 = 1
/// method = "Runge-Kutta"
/// ```
///
/// Every key is optional; missing ones must then come from the command line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunFile {
    pub t0: Option<f64>,
    pub tf: Option<f64>,
    pub dt: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
    pub s0: Option<f64>,
    pub i0: Option<f64>,
    pub method: Option<String>,
}

impl RunFile {
    /// Reads and parses a run file.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Io`] if the file cannot be read, or
    /// [`InputError::Toml`] if it is not a valid run file.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let text = fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| InputError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}
