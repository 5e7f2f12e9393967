use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Text-processing mode offered by the service.
///
/// `Process` is the alias of `Format` exposed by the service's combined
/// endpoint: it produces replacement text just like `Format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    #[default]
    Process,
    Format,
    Unescape,
    Validate,
}

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Process,
        OperationKind::Format,
        OperationKind::Unescape,
        OperationKind::Validate,
    ];

    /// Path segment under `/api/`.
    pub fn endpoint(self) -> &'static str {
        match self {
            OperationKind::Process => "process",
            OperationKind::Format => "format",
            OperationKind::Unescape => "unescape",
            OperationKind::Validate => "validate",
        }
    }

    /// Trigger label shown while this kind is selected.
    pub fn label(self) -> &'static str {
        match self {
            OperationKind::Process => "Process",
            OperationKind::Format => "Format",
            OperationKind::Unescape => "Unescape",
            OperationKind::Validate => "Validate",
        }
    }

    /// The kind whose result semantics this kind shares.
    pub fn canonical(self) -> OperationKind {
        match self {
            OperationKind::Process => OperationKind::Format,
            other => other,
        }
    }

    /// True when a successful result replaces the buffer.
    pub fn is_transform(self) -> bool {
        self.canonical() != OperationKind::Validate
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation `{0}` (expected process, format, unescape or validate)")]
pub struct UnknownOperation(pub String);

impl FromStr for OperationKind {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.endpoint().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownOperation(needle.to_string()))
    }
}

/// Indentation width sent with every request.
///
/// The wire carries a plain integer; `Zero` leaves the choice to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum IndentSize {
    Zero,
    #[default]
    Two,
    Four,
    Eight,
}

impl IndentSize {
    pub const ALL: [IndentSize; 4] = [
        IndentSize::Zero,
        IndentSize::Two,
        IndentSize::Four,
        IndentSize::Eight,
    ];

    pub fn width(self) -> u8 {
        match self {
            IndentSize::Zero => 0,
            IndentSize::Two => 2,
            IndentSize::Four => 4,
            IndentSize::Eight => 8,
        }
    }
}

impl fmt::Display for IndentSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.width())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported indent `{0}` (expected 0, 2, 4 or 8)")]
pub struct UnsupportedIndent(pub String);

impl TryFrom<u8> for IndentSize {
    type Error = UnsupportedIndent;

    fn try_from(width: u8) -> Result<Self, Self::Error> {
        IndentSize::ALL
            .into_iter()
            .find(|size| size.width() == width)
            .ok_or_else(|| UnsupportedIndent(width.to_string()))
    }
}

impl From<IndentSize> for u8 {
    fn from(size: IndentSize) -> u8 {
        size.width()
    }
}

impl FromStr for IndentSize {
    type Err = UnsupportedIndent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .map_err(|_| UnsupportedIndent(trimmed.to_string()))
            .and_then(IndentSize::try_from)
    }
}
