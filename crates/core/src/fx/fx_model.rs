use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stored BDT-per-USD rate for one month.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    pub year: i32,
    pub month: u32,
    pub rate: Decimal,
}

impl ExchangeRate {
    pub fn new(year: i32, month: u32, rate: Decimal) -> Self {
        Self { year, month, rate }
    }

    /// Zero or negative rates cannot be divided by and are treated as missing.
    pub fn is_usable(&self) -> bool {
        self.rate > Decimal::ZERO
    }
}

/// Currencies amounts can be recorded in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Bdt,
    Usd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Bdt => "BDT",
            Currency::Usd => "USD",
        }
    }

    /// Converts an amount in this currency to BDT.
    pub fn to_bdt(&self, amount: Decimal, usd_to_bdt_rate: Decimal) -> Decimal {
        match self {
            Currency::Bdt => amount,
            Currency::Usd => amount * usd_to_bdt_rate,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
