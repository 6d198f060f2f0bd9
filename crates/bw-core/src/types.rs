use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{BwError, ErrorInfo};

/// One-based identifier of a block. The table is never a block; APIs use
/// `Option<BlockId>` with `None` standing for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockId(usize);

impl BlockId {
    /// Creates an identifier from its one-based number. Returns `None` for `0`.
    pub fn from_raw(raw: usize) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    /// Creates an identifier from a zero-based index.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// Returns the one-based block number.
    pub fn as_raw(&self) -> usize {
        self.0
    }

    /// Returns the zero-based index of the block.
    pub fn index(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{}", self.0)
    }
}

impl FromStr for BlockId {
    type Err = BwError;

    /// Accepts `b3` as well as a bare `3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('b').unwrap_or(trimmed);
        digits
            .parse::<usize>()
            .ok()
            .and_then(BlockId::from_raw)
            .ok_or_else(|| {
                BwError::Parse(
                    ErrorInfo::new("invalid-block", "expected a block name such as `b1`")
                        .with_context("input", trimmed),
                )
            })
    }
}

/// A blocks-world configuration in the community "on" format.
///
/// Position `i` (zero-based) holds the one-based number of the block that block
/// `i + 1` rests on, or `0` when it is on the table. `[0, 5, 1, 0, 4, 0]` is six
/// blocks where 1, 4 and 6 are on the table, 2 is on 5, 3 on 1 and 5 on 4.
///
/// Construction checks the length and the range of every entry. Acyclicity is
/// not checked here: the sampler only produces forests and the world model
/// rejects cycles when it places blocks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Configuration(Vec<usize>);

impl Configuration {
    /// Wraps a support vector after validating its length and range.
    pub fn new(supports: Vec<usize>) -> Result<Self, BwError> {
        if supports.is_empty() {
            return Err(BwError::Config(ErrorInfo::new(
                "empty-world",
                "a configuration needs at least one block",
            )));
        }
        let size = supports.len();
        for (idx, &on) in supports.iter().enumerate() {
            if on > size {
                return Err(BwError::Config(
                    ErrorInfo::new(
                        "block-out-of-range",
                        format!("block {} is supposed to be on nonexistent block {on}", idx + 1),
                    )
                    .with_context("block", (idx + 1).to_string())
                    .with_context("size", size.to_string()),
                ));
            }
        }
        Ok(Self(supports))
    }

    /// Builds a configuration from signed values, rejecting negatives.
    pub fn from_signed(values: &[i64]) -> Result<Self, BwError> {
        let supports = values
            .iter()
            .enumerate()
            .map(|(idx, &value)| {
                usize::try_from(value).map_err(|_| {
                    BwError::Config(
                        ErrorInfo::new(
                            "negative-support",
                            format!("block {} is supposed to be on negative block {value}", idx + 1),
                        )
                        .with_context("block", (idx + 1).to_string()),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(supports)
    }

    /// Every one of `blocks` blocks on the table.
    pub fn all_on_table(blocks: usize) -> Result<Self, BwError> {
        Self::new(vec![0; blocks])
    }

    /// Number of blocks described.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: configurations hold at least one block.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw support numbers (`0` = table).
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consumes the configuration and returns the raw support numbers.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// What `block` rests on; `None` for the table.
    pub fn support(&self, block: BlockId) -> Option<BlockId> {
        self.0.get(block.index()).copied().and_then(BlockId::from_raw)
    }

    /// Renders the configuration joined by `delimiter`.
    pub fn render(&self, delimiter: &str) -> String {
        self.0
            .iter()
            .map(|on| on.to_string())
            .collect::<Vec<_>>()
            .join(delimiter)
    }

    /// Parses a configuration separated by `delimiter`.
    pub fn parse_with(text: &str, delimiter: &str) -> Result<Self, BwError> {
        let tokens: Vec<&str> = if delimiter.trim().is_empty() {
            text.split_whitespace().collect()
        } else {
            text.split(delimiter).map(str::trim).collect()
        };
        let values = tokens
            .into_iter()
            .map(|token| {
                token.parse::<i64>().map_err(|_| {
                    BwError::Parse(
                        ErrorInfo::new("invalid-number", "configuration entries must be integers")
                            .with_context("token", token),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_signed(&values)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(","))
    }
}

impl FromStr for Configuration {
    type Err = BwError;

    /// Accepts comma separated (`0,1,0`) or whitespace separated (`0 1 0`) input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(',') {
            Self::parse_with(s, ",")
        } else {
            Self::parse_with(s, " ")
        }
    }
}

impl TryFrom<Vec<usize>> for Configuration {
    type Error = BwError;

    fn try_from(value: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Configuration> for Vec<usize> {
    fn from(value: Configuration) -> Self {
        value.0
    }
}
