//! Character counter classification for length-limited form fields.

use serde::Serialize;

/// Fraction of the limit at which a counter starts warning.
const WARNING_THRESHOLD: f64 = 0.8;

/// Visual state of a character counter, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterState {
    /// Comfortably below the limit.
    Normal,
    /// At or above 80% of the limit.
    Warning,
    /// At or over the limit.
    Error,
}

impl CounterState {
    /// Lower-case name, used as a CSS modifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Classified counter for `current` characters against a `max` limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterCount {
    /// Characters entered.
    pub current: usize,
    /// Configured limit.
    pub max: usize,
    /// `max - current`; negative once the limit is exceeded.
    pub remaining: i64,
    /// `current / max * 100`, or zero when `max` is zero.
    pub percentage: f64,
    /// Threshold-derived state.
    pub state: CounterState,
    /// `"<current>/<max>"`.
    pub display: String,
}

impl CharacterCount {
    /// Classify `current` against `max`.
    ///
    /// A zero limit is treated as unconstrained rather than dividing by zero.
    ///
    /// # Examples
    /// ```
    /// use barforge_web::domain::character_counter::{CharacterCount, CounterState};
    ///
    /// let count = CharacterCount::classify(85, 100);
    /// assert_eq!(count.state, CounterState::Warning);
    /// assert_eq!(count.display, "85/100");
    /// ```
    #[must_use]
    pub fn classify(current: usize, max: usize) -> Self {
        let display = format!("{current}/{max}");
        if max == 0 {
            return Self {
                current,
                max,
                remaining: 0,
                percentage: 0.0,
                state: CounterState::Normal,
                display,
            };
        }

        let remaining = to_i64(max) - to_i64(current);
        let percentage = current as f64 / max as f64 * 100.0;
        let state = if current >= max {
            CounterState::Error
        } else if percentage >= WARNING_THRESHOLD * 100.0 {
            CounterState::Warning
        } else {
            CounterState::Normal
        };

        Self {
            current,
            max,
            remaining,
            percentage,
            state,
            display,
        }
    }

    /// Count the characters of `text` and classify them against `max`.
    #[must_use]
    pub fn for_text(text: &str, max: usize) -> Self {
        Self::classify(text.chars().count(), max)
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
