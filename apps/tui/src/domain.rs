use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Quantity used wherever unreadable quantity text is forgiven.
pub const DEFAULT_QUANTITY: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ItemId {
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse::<u64>().ok().map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub is_editing: bool,
}

impl ShoppingItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            is_editing: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("Quantity is required")]
    Empty,
    #[error("Quantity must be a whole number, got \"{0}\"")]
    NotANumber(String),
    #[error("Quantity must be at least 1, got {0}")]
    NotPositive(i64),
}

/// Parses quantity text strictly: surrounding whitespace is ignored, anything
/// else that isn't a positive integer is an error.
pub fn parse_quantity(text: &str) -> Result<u32, QuantityError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(QuantityError::Empty);
    }

    let value = trimmed
        .parse::<i64>()
        .map_err(|_| QuantityError::NotANumber(trimmed.to_string()))?;

    if value < 1 {
        return Err(QuantityError::NotPositive(value));
    }

    u32::try_from(value).map_err(|_| QuantityError::NotANumber(trimmed.to_string()))
}

pub fn parse_quantity_or_default(text: &str) -> u32 {
    parse_quantity(text).unwrap_or(DEFAULT_QUANTITY)
}

/// How the add path treats quantity text it cannot read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantityPolicy {
    /// Anything unreadable, empty text included, aborts the add.
    #[default]
    Strict,
    /// Same fallback as saving an edit: anything unreadable means 1.
    Lenient,
}

impl QuantityPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "lenient" => Some(Self::Lenient),
            _ => None,
        }
    }

    pub fn apply(self, text: &str) -> Result<u32, QuantityError> {
        match self {
            Self::Strict => parse_quantity(text),
            Self::Lenient => Ok(parse_quantity_or_default(text)),
        }
    }
}
