use crate::utils::error::{Result, TicketError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ticket categories with their fixed price and seat allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    /// Price in whole currency units.
    pub const fn price(self) -> u64 {
        match self {
            Self::Adult => 20,
            Self::Child => 10,
            Self::Infant => 0,
        }
    }

    pub const fn seat_allocation(self) -> u64 {
        match self {
            Self::Adult => 1,
            Self::Child => 1,
            Self::Infant => 0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketCategory {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            other => Err(TicketError::invalid_request(format!(
                "unknown ticket type '{}'",
                other
            ))),
        }
    }
}

/// A positive account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(raw: i64) -> Result<Self> {
        if raw > 0 {
            Ok(Self(raw))
        } else {
            Err(TicketError::invalid_account(raw))
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

/// Reads an account number from text without checking its sign, which
/// `AccountId::new` does.
pub fn parse_account_number(s: &str) -> Result<i64> {
    s.trim()
        .parse()
        .map_err(|_| TicketError::invalid_account(s.trim()))
}

/// Accepts only a positive integer; anything else is an invalid account.
impl FromStr for AccountId {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(parse_account_number(s)?)
    }
}

impl TryFrom<i64> for AccountId {
    type Error = TicketError;

    fn try_from(raw: i64) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of a purchase: a category and how many tickets of it.
///
/// Only constructible with a positive count, so an invalid request never
/// reaches the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketRequest {
    category: TicketCategory,
    count: u32,
}

impl TicketRequest {
    pub fn new(category: TicketCategory, count: i64) -> Result<Self> {
        if count <= 0 {
            return Err(TicketError::invalid_request(format!(
                "number of {} tickets must be a positive integer, got {}",
                category, count
            )));
        }
        let count = u32::try_from(count).map_err(|_| {
            TicketError::invalid_request(format!(
                "number of {} tickets is too large: {}",
                category, count
            ))
        })?;

        Ok(Self { category, count })
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn amount(&self) -> u64 {
        u64::from(self.count) * self.category.price()
    }

    pub fn seats(&self) -> u64 {
        u64::from(self.count) * self.category.seat_allocation()
    }
}

/// Parses `CATEGORY=COUNT`, e.g. `ADULT=2`.
impl FromStr for TicketRequest {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self> {
        let (category, count) = s.split_once('=').ok_or_else(|| {
            TicketError::invalid_request(format!("expected CATEGORY=COUNT, got '{}'", s))
        })?;
        let category: TicketCategory = category.parse()?;
        let count: i64 = count.trim().parse().map_err(|_| {
            TicketError::invalid_request(format!(
                "number of {} tickets must be an integer, got '{}'",
                category,
                count.trim()
            ))
        })?;

        Self::new(category, count)
    }
}

impl fmt::Display for TicketRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.category, self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub account_id: i64,
    pub tickets: Vec<TicketRequest>,
}

impl PurchaseRequest {
    pub fn new(account_id: i64, tickets: Vec<TicketRequest>) -> Self {
        Self {
            account_id,
            tickets,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOutcome {
    pub account_id: AccountId,
    pub total_amount: u64,
    pub total_seats: u64,
}

impl PurchaseOutcome {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Ticket counts per category over a whole purchase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketTally {
    pub adult: u64,
    pub child: u64,
    pub infant: u64,
}

impl TicketTally {
    pub fn from_requests(requests: &[TicketRequest]) -> Self {
        let mut tally = Self::default();
        for request in requests {
            let count = u64::from(request.count());
            match request.category() {
                TicketCategory::Adult => tally.adult += count,
                TicketCategory::Child => tally.child += count,
                TicketCategory::Infant => tally.infant += count,
            }
        }
        tally
    }

    pub fn total(&self) -> u64 {
        self.adult + self.child + self.infant
    }
}
