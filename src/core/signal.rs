//! Signal wrapper: a value plus the confidence and provenance it carries.

use crate::core::types::{SignalConfidence, SignalSource};
use serde::{Deserialize, Serialize};

/// A derived or declared value with per-signal trust and provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal<T> {
    pub value: T,
    pub confidence: SignalConfidence,
    pub source: SignalSource,
}

impl<T> Signal<T> {
    pub fn new(value: T, confidence: SignalConfidence, source: SignalSource) -> Self {
        Self {
            value,
            confidence,
            source,
        }
    }

    /// A defaulted value nothing vouches for.
    pub fn unknown(value: T) -> Self {
        Self::new(value, SignalConfidence::Unknown, SignalSource::Default)
    }

    /// An explicit, authoritative declaration.
    pub fn declared(value: T) -> Self {
        Self::new(value, SignalConfidence::High, SignalSource::Declared)
    }

    /// An authoritative App-Mod fact.
    pub fn app_mod(value: T) -> Self {
        Self::new(value, SignalConfidence::High, SignalSource::AppMod)
    }

    /// A user answer. Always HIGH.
    pub fn answered(value: T) -> Self {
        Self::new(value, SignalConfidence::High, SignalSource::UserAnswer)
    }

    pub fn heuristic(value: T, confidence: SignalConfidence) -> Self {
        Self::new(value, confidence, SignalSource::Heuristic)
    }

    /// True when the value was used without HIGH confidence, i.e. it is an
    /// assumption in explanation terms.
    pub fn is_assumed(&self) -> bool {
        self.confidence != SignalConfidence::High
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Signal<U> {
        Signal {
            value: f(self.value),
            confidence: self.confidence,
            source: self.source,
        }
    }
}
