//! View state for the weather screen.
//!
//! A small state machine: `Idle → Loading → {Success, Failure}`, re-entering
//! `Loading` whenever the country identifier changes. Fetches resolve
//! asynchronously, so every in-flight request carries a sequence number and
//! resolutions with a stale sequence are discarded; a slow response for a
//! country the user already navigated away from can never overwrite the
//! newer request's state.

use crate::api::WeatherError;
use crate::models::{Unit, WeatherReport};

/// User-facing message for transport-level failures.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to fetch data. Please try again.";

/// User-facing fallback when the API reports failure without a message.
pub const API_FAILURE_FALLBACK: &str = "Unable to fetch weather data.";

/// Fetch lifecycle of the weather screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeatherPhase {
    /// No identifier yet
    #[default]
    Idle,
    /// Fetch in flight
    Loading,
    /// Record available
    Success,
    /// Error message available
    Failure,
}

/// State backing the weather screen.
///
/// After a fetch settles, `record` and `error` are mutually exclusive.
#[derive(Debug, Clone, Default)]
pub struct WeatherViewState {
    /// Decoded country display name used as the query term
    country: String,
    record: Option<WeatherReport>,
    unit: Unit,
    error: Option<String>,
    phase: WeatherPhase,
    /// Sequence number of the latest fetch; stale resolutions are dropped
    seq: u64,
}

impl WeatherViewState {
    /// Create an idle view state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Loading` for a (new) country identifier.
    ///
    /// Clears any prior record and error, bumps the request sequence, and
    /// returns the sequence number the caller must echo in [`resolve`].
    ///
    /// [`resolve`]: Self::resolve
    pub fn begin_fetch(&mut self, country: String) -> u64 {
        self.country = country;
        self.record = None;
        self.error = None;
        self.phase = WeatherPhase::Loading;
        self.seq += 1;
        self.seq
    }

    /// Apply the outcome of the fetch started with sequence `seq`.
    ///
    /// A resolution whose sequence is not the latest is discarded. The
    /// loading phase ends exactly once per fetch, whichever branch is taken.
    pub fn resolve(&mut self, seq: u64, outcome: Result<WeatherReport, WeatherError>) {
        if seq != self.seq {
            tracing::debug!(stale = seq, current = self.seq, "dropping stale weather response");
            return;
        }

        match outcome {
            Ok(report) => {
                self.record = Some(report);
                self.error = None;
                self.phase = WeatherPhase::Success;
            }
            Err(WeatherError::Api { message, .. }) => {
                self.record = None;
                self.error = Some(message.unwrap_or_else(|| API_FAILURE_FALLBACK.to_string()));
                self.phase = WeatherPhase::Failure;
            }
            Err(WeatherError::MissingData) => {
                self.record = None;
                self.error = Some(API_FAILURE_FALLBACK.to_string());
                self.phase = WeatherPhase::Failure;
            }
            Err(WeatherError::Transport(_)) | Err(WeatherError::Decode(_)) => {
                self.record = None;
                self.error = Some(TRANSPORT_FAILURE_MESSAGE.to_string());
                self.phase = WeatherPhase::Failure;
            }
        }
    }

    /// Flip Metric↔Imperial.
    ///
    /// Display-only: relabels the already-fetched metric values and never
    /// triggers a re-fetch.
    pub fn toggle_unit(&mut self) {
        self.unit = self.unit.toggled();
    }

    // -------------------- accessors --------------------

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn record(&self) -> Option<&WeatherReport> {
        self.record.as_ref()
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> WeatherPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == WeatherPhase::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::HttpError;

    fn report() -> WeatherReport {
        WeatherReport {
            temperature: 11.5,
            description: "light rain".to_string(),
            wind_speed: 4.6,
            cloud_coverage: 75,
        }
    }

    #[test]
    fn begin_fetch_enters_loading_and_clears_state() {
        let mut state = WeatherViewState::new();
        assert_eq!(state.phase(), WeatherPhase::Idle);

        let seq = state.begin_fetch("Norway".to_string());
        assert!(state.is_loading());
        assert_eq!(state.country(), "Norway");
        assert!(state.record().is_none());
        assert!(state.error().is_none());

        state.resolve(seq, Ok(report()));
        assert_eq!(state.phase(), WeatherPhase::Success);

        // Re-entering loading clears the previous record
        state.begin_fetch("Peru".to_string());
        assert!(state.record().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn api_error_resolves_to_failure_with_service_message() {
        let mut state = WeatherViewState::new();
        let seq = state.begin_fetch("Nowhereland".to_string());

        state.resolve(
            seq,
            Err(WeatherError::Api {
                code: 404,
                message: Some("city not found".to_string()),
            }),
        );

        assert_eq!(state.phase(), WeatherPhase::Failure);
        assert_eq!(state.error(), Some("city not found"));
        assert!(state.record().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn api_error_without_message_uses_fallback() {
        let mut state = WeatherViewState::new();
        let seq = state.begin_fetch("Nowhereland".to_string());

        state.resolve(seq, Err(WeatherError::Api { code: 500, message: None }));
        assert_eq!(state.error(), Some(API_FAILURE_FALLBACK));
    }

    #[test]
    fn transport_error_resolves_to_generic_message() {
        let mut state = WeatherViewState::new();
        let seq = state.begin_fetch("Norway".to_string());

        state.resolve(
            seq,
            Err(WeatherError::Transport(HttpError::ConnectionFailed(
                "dns".to_string(),
            ))),
        );

        assert_eq!(state.phase(), WeatherPhase::Failure);
        assert_eq!(state.error(), Some(TRANSPORT_FAILURE_MESSAGE));
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_resolution_is_discarded() {
        let mut state = WeatherViewState::new();
        let first = state.begin_fetch("Norway".to_string());
        let second = state.begin_fetch("Peru".to_string());
        assert_ne!(first, second);

        // The slow response for the earlier request arrives late
        state.resolve(first, Ok(report()));
        assert!(state.is_loading());
        assert!(state.record().is_none());

        state.resolve(second, Ok(report()));
        assert_eq!(state.phase(), WeatherPhase::Success);
        assert_eq!(state.country(), "Peru");
    }

    #[test]
    fn toggle_unit_keeps_record_and_phase() {
        let mut state = WeatherViewState::new();
        let seq = state.begin_fetch("Norway".to_string());
        state.resolve(seq, Ok(report()));

        assert_eq!(state.unit(), Unit::Metric);
        state.toggle_unit();
        assert_eq!(state.unit(), Unit::Imperial);
        assert_eq!(state.phase(), WeatherPhase::Success);
        // The stored numeric value is untouched; only the label changes
        assert_eq!(state.record().unwrap().temperature, 11.5);
        state.toggle_unit();
        assert_eq!(state.unit(), Unit::Metric);
    }
}
