//! Collects run fields as text and turns them into a [`Scenario`].
//!
//! Parsing happens here, at the boundary, so a malformed value never reaches
//! the integrator.

use std::{num::ParseFloatError, path::PathBuf};

use epistep_models::seihrd::Scenario;
use epistep_solvers::transient::fixed_step::Method;
use thiserror::Error;

use crate::{args::Args, config::RunFile};

/// Malformed or missing run input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("missing value for {field}")]
    Missing { field: &'static str },

    #[error("invalid number {value:?} for {field}")]
    Malformed {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("unknown integration method {value:?}, expected \"Euler\" or \"Runge-Kutta\"")]
    UnknownMethod { value: String },

    #[error("cannot read run file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid run file {}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// The run fields as entered, before parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputForm {
    pub t0: Option<String>,
    pub tf: Option<String>,
    pub dt: Option<String>,
    pub beta: Option<String>,
    pub gamma: Option<String>,
    pub s0: Option<String>,
    pub i0: Option<String>,
    pub method: Option<String>,
}

impl From<&Args> for InputForm {
    fn from(args: &Args) -> Self {
        Self {
            t0: args.t0.clone(),
            tf: args.tf.clone(),
            dt: args.dt.clone(),
            beta: args.beta.clone(),
            gamma: args.gamma.clone(),
            s0: args.s0.clone(),
            i0: args.i0.clone(),
            method: args.method.clone(),
        }
    }
}

impl InputForm {
    /// Fills fields that are still empty from a run file.
    #[must_use]
    pub fn or_file(self, file: RunFile) -> Self {
        let text = |value: Option<f64>| value.map(|v| v.to_string());
        Self {
            t0: self.t0.or_else(|| text(file.t0)),
            tf: self.tf.or_else(|| text(file.tf)),
            dt: self.dt.or_else(|| text(file.dt)),
            beta: self.beta.or_else(|| text(file.beta)),
            gamma: self.gamma.or_else(|| text(file.gamma)),
            s0: self.s0.or_else(|| text(file.s0)),
            i0: self.i0.or_else(|| text(file.i0)),
            method: self.method.or(file.method),
        }
    }

    /// Parses every field.
    ///
    /// The method defaults to Euler when left empty; every numeric field is
    /// required.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] found, in field order.
    pub fn parse(&self) -> Result<Scenario, InputError> {
        Ok(Scenario {
            t0: number("t0", self.t0.as_deref())?,
            tf: number("tf", self.tf.as_deref())?,
            dt: number("dt", self.dt.as_deref())?,
            beta: number("beta", self.beta.as_deref())?,
            gamma: number("gamma", self.gamma.as_deref())?,
            s0: number("s0", self.s0.as_deref())?,
            i0: number("i0", self.i0.as_deref())?,
            method: method(self.method.as_deref())?,
        })
    }
}

fn number(field: &'static str, text: Option<&str>) -> Result<f64, InputError> {
    let text = text.map(str::trim).filter(|t| !t.is_empty());
    let text = text.ok_or(InputError::Missing { field })?;

    text.parse().map_err(|source| InputError::Malformed {
        field,
        value: text.to_owned(),
        source,
    })
}

fn method(text: Option<&str>) -> Result<Method, InputError> {
    match text.map(str::trim).filter(|t| !t.is_empty()) {
        None => Ok(Method::Euler),
        Some(label) => label.parse().map_err(|_| InputError::UnknownMethod {
            value: label.to_owned(),
        }),
    }
}
