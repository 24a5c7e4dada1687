//! Core types for the vocabulary engine.

use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Coarse mastery indicator, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(5);

    /// Create a level, clamping out-of-range values to the nearest bound.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// One step up, saturating at `MAX`.
    pub fn raise(self) -> Self {
        Self((self.0 + 1).min(Self::MAX.0))
    }

    /// One step down, saturating at `MIN`.
    pub fn lower(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN.0))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<i64> for Level {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three user-supplied fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordField {
    Word,
    Definition,
    Translation,
}

impl WordField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Definition => "definition",
            Self::Translation => "translation",
        }
    }
}

impl fmt::Display for WordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to add a word, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWord {
    pub word: String,
    pub definition: String,
    pub translation: String,
}

impl NewWord {
    pub fn new(
        word: impl Into<String>,
        definition: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            translation: translation.into(),
        }
    }

    /// Trim every field, rejecting the request if any of them ends up empty.
    pub fn validate(&self) -> Result<NewWord, ValidationError> {
        let word = non_empty(&self.word, WordField::Word)?;
        let definition = non_empty(&self.definition, WordField::Definition)?;
        let translation = non_empty(&self.translation, WordField::Translation)?;
        Ok(NewWord {
            word,
            definition,
            translation,
        })
    }
}

fn non_empty(value: &str, field: WordField) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Record identifier.
///
/// Ids assigned here are always integers; string ids written by other clients
/// are kept verbatim so a load/save cycle never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(id) => Some(*id),
            Self::Text(_) => None,
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl PartialEq<i64> for RecordId {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{}", id),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Float(f64),
            Text(String),
        }

        // 2^63 is exactly representable; anything at or above it does not fit.
        const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

        match RawId::deserialize(deserializer)? {
            RawId::Int(id) => Ok(Self::Int(id)),
            RawId::Float(id) if id.fract() == 0.0 && id >= -I64_BOUND && id < I64_BOUND => {
                Ok(Self::Int(id as i64))
            }
            RawId::Float(id) => Err(serde::de::Error::custom(format!("invalid id: {}", id))),
            RawId::Text(text) => Ok(Self::Text(text)),
        }
    }
}

/// One vocabulary entry with its mastery statistics.
///
/// Records are values: progress produces a new record which replaces the old
/// one in the store wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyRecord {
    pub id: RecordId,
    pub word: String,
    pub definition: String,
    pub translation: String,
    #[serde(default)]
    pub times_wrong: u32,
    #[serde(default)]
    pub times_correct: u32,
    pub last_seen: DateTime<Utc>,
    #[serde(default)]
    pub level: Level,
}

impl VocabularyRecord {
    /// Build a fresh record from an already validated request.
    pub fn new(id: impl Into<RecordId>, fields: NewWord, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            word: fields.word,
            definition: fields.definition,
            translation: fields.translation,
            times_wrong: 0,
            times_correct: 0,
            last_seen: now,
            level: Level::MIN,
        }
    }

    /// Whether the record has been graded at least once.
    pub fn is_attempted(&self) -> bool {
        self.times_wrong + self.times_correct > 0
    }

    /// `times_wrong - times_correct`; higher means harder.
    pub fn difficulty_score(&self) -> i64 {
        self.times_wrong as i64 - self.times_correct as i64
    }

    /// Sampling weight: one plus the number of wrong answers.
    pub fn weight(&self) -> u64 {
        (self.times_wrong as u64 + 1).max(1)
    }
}
