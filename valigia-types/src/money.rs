//! Monetary values with validated ISO 4217 currency codes.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Validated ISO 4217 currency code (three ASCII uppercase letters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency([u8; 3]);

impl Currency {
    /// United States dollar.
    pub const USD: Self = Self(*b"USD");
    /// Euro.
    pub const EUR: Self = Self(*b"EUR");
    /// Pound sterling.
    pub const GBP: Self = Self(*b"GBP");
    /// Japanese yen.
    pub const JPY: Self = Self(*b"JPY");
    /// Swiss franc.
    pub const CHF: Self = Self(*b"CHF");

    /// Parse and validate a currency code.
    ///
    /// # Errors
    /// Returns `ValidationError::Currency` unless the code is exactly three
    /// ASCII letters; lowercase input is accepted and canonicalized.
    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(ValidationError::Currency(code.to_string()));
        }
        let mut out = [0u8; 3];
        for (o, b) in out.iter_mut().zip(bytes) {
            *o = b.to_ascii_uppercase();
        }
        Ok(Self(out))
    }

    /// The canonical three-letter code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Bytes are validated ASCII at construction.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_code(&s).map_err(serde::de::Error::custom)
    }
}

/// A non-negative amount in a specific currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MoneyWire")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

/// Unvalidated shape used to re-check invariants on deserialization.
#[derive(Deserialize)]
struct MoneyWire {
    amount: Decimal,
    currency: Currency,
}

impl TryFrom<MoneyWire> for Money {
    type Error = ValidationError;

    fn try_from(wire: MoneyWire) -> Result<Self, Self::Error> {
        Self::new(wire.amount, wire.currency)
    }
}

impl Money {
    /// Construct a monetary value.
    ///
    /// # Errors
    /// Returns `ValidationError::Price` for negative amounts.
    pub fn new(amount: Decimal, currency: Currency) -> Result<Self, ValidationError> {
        if amount.is_sign_negative() {
            return Err(ValidationError::Price(format!("{amount} {currency}")));
        }
        Ok(Self { amount, currency })
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency the amount is denominated in.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Re-denominate into `target` at the given rate, rounded to two
    /// decimal places.
    #[must_use]
    pub fn converted(&self, rate: Decimal, target: Currency) -> Self {
        Self {
            amount: (self.amount * rate).round_dp(2),
            currency: target,
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
