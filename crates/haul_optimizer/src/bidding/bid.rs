use std::fmt::Display;

use serde::Serialize;

/// Answer to an auctioned task.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Bid {
    Price(u64),
    /// The agent declines the task.
    Abstain,
}

impl Bid {
    pub fn price(&self) -> Option<u64> {
        match self {
            Bid::Price(price) => Some(*price),
            Bid::Abstain => None,
        }
    }

    pub fn is_abstain(&self) -> bool {
        matches!(self, Bid::Abstain)
    }
}

impl Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bid::Price(price) => write!(f, "{price}"),
            Bid::Abstain => write!(f, "abstain"),
        }
    }
}
