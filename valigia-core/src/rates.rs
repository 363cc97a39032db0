use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::ValigiaError;
use valigia_types::Currency;

/// Exchange-rate lookup consumed during normalization.
///
/// Lookups are synchronous: the normalization pass runs as CPU-bound work
/// after all provider sub-tasks have settled, so implementations backed by
/// a remote feed are expected to refresh out-of-band and answer from a
/// local snapshot.
pub trait RateSource: Send + Sync {
    /// Units of `to` per one unit of `from`.
    ///
    /// # Errors
    /// Returns `ValigiaError::Data` when no rate is known for the pair;
    /// offers priced in that currency are then dropped rather than shown
    /// with a wrong price.
    fn rate(&self, from: Currency, to: Currency) -> Result<Decimal, ValigiaError>;
}

/// In-memory rate table.
#[derive(Debug, Default)]
pub struct StaticRates {
    table: HashMap<(Currency, Currency), Decimal>,
}

impl StaticRates {
    /// Create an empty table (identity conversions still succeed).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rate for a currency pair.
    #[must_use]
    pub fn with_rate(mut self, from: Currency, to: Currency, rate: Decimal) -> Self {
        self.table.insert((from, to), rate);
        self
    }
}

impl RateSource for StaticRates {
    fn rate(&self, from: Currency, to: Currency) -> Result<Decimal, ValigiaError> {
        if from == to {
            return Ok(Decimal::ONE);
        }
        self.table
            .get(&(from, to))
            .copied()
            .ok_or_else(|| ValigiaError::Data(format!("no exchange rate for {from}->{to}")))
    }
}
