//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::{Error, ipc::Series, timezone::get_local_offset};

/// The state of the REST server.
///
/// The series is loaded once at startup and never changes, so handlers share
/// it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The IPC series with the year-over-year change already derived.
    pub series: Arc<Series>,

    /// The local timezone as a canonical timezone name, e.g. "America/Guayaquil".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] that serves `series`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g.
    /// "America/Guayaquil". It decides the current year, which is the
    /// fallback selection when the series is empty.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezone] if `local_timezone` is not a known
    /// canonical timezone.
    pub fn new(series: Series, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezone(local_timezone.to_owned()));
        }

        Ok(Self {
            series: Arc::new(series),
            local_timezone: local_timezone.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, ipc::Series};

    use super::AppState;

    #[test]
    fn accepts_canonical_timezone() {
        let state = AppState::new(Series::empty(), "America/Guayaquil").unwrap();

        assert_eq!(state.local_timezone, "America/Guayaquil");
        assert!(state.series.is_empty());
    }

    #[test]
    fn rejects_unknown_timezone() {
        let result = AppState::new(Series::empty(), "Atlantis/Capital");

        assert!(matches!(result, Err(Error::InvalidTimezone(_))));
    }
}
