//! Settings for the contact form controller.
//!
//! [`Settings`] holds timing, label, and character-counter configuration.
//! Every section has defaults matching the reference form, so an empty
//! configuration document produces a fully working controller.
//!
//! Validation limits are not configurable and live next to the validators.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timer durations for the simulated submission lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSettings {
    /// Delay between starting a submission and reporting success.
    pub submit_delay_ms: u64,
    /// How long the success notification stays visible.
    pub success_display_ms: u64,
}

impl TimingSettings {
    /// Returns the submit delay as a [`Duration`].
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Returns the success display window as a [`Duration`].
    pub const fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            success_display_ms: 5000,
        }
    }
}

/// User-visible texts that are not validation messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSettings {
    /// Submit control label while idle.
    pub submit_idle: String,
    /// Submit control label while a submission is in flight.
    pub submit_sending: String,
    /// Question asked before resetting the form.
    pub reset_confirmation: String,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            submit_idle: "Send Message".to_string(),
            submit_sending: "Sending...".to_string(),
            reset_confirmation: "Are you sure you want to reset the form? All data will be lost."
                .to_string(),
        }
    }
}

/// Character counter thresholds and colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSettings {
    /// The limit displayed next to the count.
    pub limit: usize,
    /// Counts strictly above this use the warning color.
    pub warning_above: usize,
    /// Counts strictly above this use the danger color.
    pub danger_above: usize,
    /// Color below the warning threshold.
    pub default_color: String,
    /// Color in the warning band.
    pub warning_color: String,
    /// Color above the danger threshold.
    pub danger_color: String,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            limit: 1000,
            warning_above: 750,
            danger_above: 900,
            default_color: "#666".to_string(),
            warning_color: "#f39c12".to_string(),
            danger_color: "#e74c3c".to_string(),
        }
    }
}

/// The complete set of controller settings.
///
/// # Examples
///
/// ```
/// use contactform_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.timing.submit_delay_ms, 1500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether debug mode is enabled (pretty logs instead of JSON).
    pub debug: bool,
    /// The log level filter (e.g. "info", "debug", "contactform_forms=trace").
    pub log_level: String,
    /// Timer durations.
    pub timing: TimingSettings,
    /// Submit and reset texts.
    pub labels: LabelSettings,
    /// Character counter configuration.
    pub counter: CounterSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            timing: TimingSettings::default(),
            labels: LabelSettings::default(),
            counter: CounterSettings::default(),
        }
    }
}
