use std::fmt;

use super::GeometryKind;

/// A non-fatal condition met while walking a geometry tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A component produced no geometry mapping.
    MissingGeometry { path: String },
    /// A leaf did not match the requested kind and was skipped.
    FilteredOut { path: String, kind: GeometryKind },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGeometry { path } => write!(f, "{path}: component produced no geometry"),
            Self::FilteredOut { path, kind } => write!(f, "{path}: skipped {kind} leaf"),
        }
    }
}

/// A value together with the warnings raised while computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reported<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> Reported<T> {
    /// Discards the warnings.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns whether no warnings were raised.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Collects warnings and mirrors each one to the `tracing` debug channel.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub(crate) fn report(&mut self, warning: Warning) {
        tracing::debug!(%warning, "geometry walk");
        self.warnings.push(warning);
    }

    pub(crate) fn finish<T>(self, value: T) -> Reported<T> {
        Reported {
            value,
            warnings: self.warnings,
        }
    }
}
