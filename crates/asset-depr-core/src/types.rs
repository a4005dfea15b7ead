use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.60 = 60%). Never as percentages.
pub type Rate = Decimal;

/// Commodity code attached to an amount.
///
/// Ledgers carry arbitrary codes, so anything outside the common set is
/// preserved verbatim in `Other`. Serialized as the bare code string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    INR,
    CAD,
    JPY,
    AUD,
    CHF,
    Other(String),
}

impl Currency {
    fn from_code(code: &str) -> Self {
        match code {
            "USD" => Currency::USD,
            "EUR" => Currency::EUR,
            "GBP" => Currency::GBP,
            "INR" => Currency::INR,
            "CAD" => Currency::CAD,
            "JPY" => Currency::JPY,
            "AUD" => Currency::AUD,
            "CHF" => Currency::CHF,
            other => Currency::Other(other.to_string()),
        }
    }

    /// The plain code, e.g. `"INR"`.
    pub fn code(&self) -> &str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::INR => "INR",
            Currency::CAD => "CAD",
            Currency::JPY => "JPY",
            Currency::AUD => "AUD",
            Currency::CHF => "CHF",
            Currency::Other(code) => code,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Currency::from_code(s))
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Currency::from_code(code)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Currency::from_code(&code))
    }
}

/// A single monetary amount with its commodity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Quantity of the commodity.
    pub number: Money,
    /// Commodity the quantity is denominated in.
    pub currency: Currency,
}

impl Amount {
    pub fn new(number: Money, currency: Currency) -> Self {
        Self { number, currency }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.currency)
    }
}
