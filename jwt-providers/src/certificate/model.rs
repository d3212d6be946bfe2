use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Copy, Clone, Default, Display, PartialEq, Eq)]
pub enum KeyType {
    #[default]
    #[strum(serialize = "PEM")]
    Pem,
}

/// When a previously written normalized copy may be served instead of the
/// source file.
#[derive(Debug, Copy, Clone, Default, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyCachePolicy {
    /// An existing normalized copy is always reused, even if the source
    /// changed afterwards.
    #[default]
    Reuse,
    /// The normalized copy is rewritten when the source was modified after it.
    RefreshWhenStale,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NormalizeOutcome {
    Written,
    Reused,
}
