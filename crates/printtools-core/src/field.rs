//! Text-backed numeric input with debounced commit.
//!
//! Every numeric field goes through the same lifecycle: raw text is edited
//! freely, then committed either on blur or after [`INPUT_DEBOUNCE`] without
//! further keystrokes. Both paths run the same sanitizer, so typing and
//! waiting produces exactly the same state as typing and tabbing away.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::consts::{FIELD_PRECISION, INPUT_DEBOUNCE};
use crate::units::{format_mm, round_to};

/// What happens to a parsed value below the field minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BelowMinimum {
    /// Raise the value to the minimum.
    Clamp,
    /// Treat the entry as invalid and revert.
    Reject,
}

/// Validation rules of one numeric field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub min: f64,
    pub precision: u32,
    pub below_min: BelowMinimum,
}

impl FieldSpec {
    pub const fn clamped(min: f64) -> Self {
        Self {
            min,
            precision: FIELD_PRECISION,
            below_min: BelowMinimum::Clamp,
        }
    }

    pub const fn rejecting(min: f64) -> Self {
        Self {
            min,
            precision: FIELD_PRECISION,
            below_min: BelowMinimum::Reject,
        }
    }

    /// Parse and normalize raw text. `None` means the entry must be reverted.
    pub fn sanitize(&self, raw: &str) -> Option<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let parsed: f64 = trimmed.parse().ok()?;
        if !parsed.is_finite() {
            return None;
        }

        let bounded = if parsed < self.min {
            match self.below_min {
                BelowMinimum::Clamp => self.min,
                BelowMinimum::Reject => return None,
            }
        } else {
            parsed
        };

        Some(round_to(bounded, self.precision))
    }
}

/// Result of committing a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CommitOutcome {
    /// Raw text was accepted; `changed` tells whether the value moved.
    Valid { value: f64, changed: bool },
    /// Raw text was rejected and snapped back to the last valid value.
    Reverted { value: f64 },
}

impl CommitOutcome {
    pub fn value(&self) -> f64 {
        match *self {
            CommitOutcome::Valid { value, .. } | CommitOutcome::Reverted { value } => value,
        }
    }

    /// True when the committed value differs from the previous one.
    pub fn changed(&self) -> bool {
        matches!(self, CommitOutcome::Valid { changed: true, .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FieldState {
    Idle,
    Editing { last_input: Instant },
}

#[derive(Clone, Debug)]
pub struct NumericField {
    spec: FieldSpec,
    value: f64,
    raw: String,
    state: FieldState,
    debounce: Duration,
}

impl NumericField {
    pub fn new(spec: FieldSpec, value: f64) -> Self {
        Self {
            spec,
            value,
            raw: format_mm(value),
            state: FieldState::Idle,
            debounce: INPUT_DEBOUNCE,
        }
    }

    /// Override the idle delay (default [`INPUT_DEBOUNCE`]).
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn spec(&self) -> FieldSpec {
        self.spec
    }

    /// Last committed value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Text currently shown in the input.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, FieldState::Editing { .. })
    }

    /// When the pending edit will commit on its own, if any.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            FieldState::Editing { last_input } => Some(last_input + self.debounce),
            FieldState::Idle => None,
        }
    }

    /// Record a keystroke; restarts the idle timer.
    pub fn edit(&mut self, raw: impl Into<String>, now: Instant) {
        self.raw = raw.into();
        self.state = FieldState::Editing { last_input: now };
    }

    /// Commit on loss of focus.
    pub fn blur(&mut self) -> CommitOutcome {
        self.commit()
    }

    /// Commit if the idle delay has elapsed since the last keystroke.
    pub fn poll(&mut self, now: Instant) -> Option<CommitOutcome> {
        match self.deadline() {
            Some(deadline) if now >= deadline => Some(self.commit()),
            _ => None,
        }
    }

    /// Sanitize the raw text and either accept it or snap back.
    pub fn commit(&mut self) -> CommitOutcome {
        self.state = FieldState::Idle;
        match self.spec.sanitize(&self.raw) {
            Some(value) => {
                let changed = value != self.value;
                self.value = value;
                self.raw = format_mm(value);
                debug!("Field committed {} (changed: {})", self.raw, changed);
                CommitOutcome::Valid { value, changed }
            }
            None => {
                debug!("Field reverted {:?} to {}", self.raw, self.value);
                self.raw = format_mm(self.value);
                CommitOutcome::Reverted { value: self.value }
            }
        }
    }

    /// Programmatic update; drops any pending edit.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.discard_edit();
    }

    /// Drop a pending edit and show the committed value again.
    pub fn discard_edit(&mut self) {
        self.state = FieldState::Idle;
        self.raw = format_mm(self.value);
    }
}
