//! Canonical search request and its validating builder.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::TravelDomain;
use crate::error::ValidationError;
use crate::money::Currency;
use crate::offer::Amenities;

/// Opaque location descriptor: an IATA airport/city code or a provider
/// destination code. Canonicalized to ASCII uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Place(String);

impl Place {
    /// Parse and canonicalize a place code.
    ///
    /// # Errors
    /// Returns `ValidationError::Place` unless the code is 2..=8
    /// alphanumeric ASCII characters.
    pub fn new(code: impl AsRef<str>) -> Result<Self, ValidationError> {
        let code = code.as_ref().trim();
        if !(2..=8).contains(&code.len()) || !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ValidationError::Place(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// The canonical code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Place {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Chronologically ordered travel dates: departure/check-in, and an
/// optional return/check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Construct a date range.
    ///
    /// # Errors
    /// Returns `ValidationError::Dates` when `end` precedes `start`.
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Result<Self, ValidationError> {
        if let Some(e) = end
            && e < start
        {
            return Err(ValidationError::Dates(format!("{e} precedes {start}")));
        }
        Ok(Self { start, end })
    }

    /// Departure or check-in date.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Return or check-out date, when present.
    #[must_use]
    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Number of nights between start and end, when an end date exists.
    #[must_use]
    pub fn nights(&self) -> Option<i64> {
        self.end.map(|e| (e - self.start).num_days())
    }
}

/// Traveller composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Party {
    adults: u8,
    children: u8,
    rooms: u8,
}

impl Party {
    /// Construct a party.
    ///
    /// # Errors
    /// Returns `ValidationError::Party` unless there is at least one adult
    /// and at least one room.
    pub fn new(adults: u8, children: u8, rooms: u8) -> Result<Self, ValidationError> {
        if adults == 0 {
            return Err(ValidationError::Party("at least one adult".into()));
        }
        if rooms == 0 {
            return Err(ValidationError::Party("at least one room".into()));
        }
        Ok(Self {
            adults,
            children,
            rooms,
        })
    }

    /// Number of adults (>= 1).
    #[must_use]
    pub const fn adults(&self) -> u8 {
        self.adults
    }

    /// Number of children.
    #[must_use]
    pub const fn children(&self) -> u8 {
        self.children
    }

    /// Number of rooms (>= 1).
    #[must_use]
    pub const fn rooms(&self) -> u8 {
        self.rooms
    }
}

impl Default for Party {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
            rooms: 1,
        }
    }
}

/// Caller-supplied result filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// Upper price bound in the request currency.
    pub max_price: Option<Decimal>,
    /// Maximum number of stops (flights).
    pub max_stops: Option<u8>,
    /// Minimum star rating (hotels).
    pub min_rating: Option<u8>,
    /// Amenities the caller cares about; matching offers score a bonus.
    pub amenities: Amenities,
}

/// Immutable, validated search request.
///
/// Construct through [`SearchRequest::builder`]; the builder enforces the
/// domain invariants (ordered non-empty dates, >= 1 adult, hotel stays
/// need a check-out date) so downstream code never re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    domain: TravelDomain,
    origin: Option<Place>,
    destination: Place,
    dates: DateRange,
    party: Party,
    currency: Currency,
    locale: Option<String>,
    filters: Filters,
}

impl SearchRequest {
    /// Start building a request for the given domain.
    #[must_use]
    pub fn builder(domain: TravelDomain) -> SearchRequestBuilder {
        SearchRequestBuilder::new(domain)
    }

    /// The product surface being searched.
    #[must_use]
    pub const fn domain(&self) -> TravelDomain {
        self.domain
    }

    /// Origin place (always present for flights).
    #[must_use]
    pub const fn origin(&self) -> Option<&Place> {
        self.origin.as_ref()
    }

    /// Destination or stay location.
    #[must_use]
    pub const fn destination(&self) -> &Place {
        &self.destination
    }

    /// Travel dates.
    #[must_use]
    pub const fn dates(&self) -> &DateRange {
        &self.dates
    }

    /// Traveller composition.
    #[must_use]
    pub const fn party(&self) -> &Party {
        &self.party
    }

    /// Currency all result prices are normalized into.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Presentation locale hint. Display-only; excluded from the
    /// fingerprint.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Caller-supplied filters.
    #[must_use]
    pub const fn filters(&self) -> &Filters {
        &self.filters
    }
}

/// Builder for [`SearchRequest`].
#[derive(Debug, Clone)]
pub struct SearchRequestBuilder {
    domain: TravelDomain,
    origin: Option<Place>,
    destination: Option<Place>,
    dates: Option<DateRange>,
    party: Party,
    currency: Currency,
    locale: Option<String>,
    filters: Filters,
}

impl SearchRequestBuilder {
    fn new(domain: TravelDomain) -> Self {
        Self {
            domain,
            origin: None,
            destination: None,
            dates: None,
            party: Party::default(),
            currency: Currency::USD,
            locale: None,
            filters: Filters::default(),
        }
    }

    /// Set the origin place (required for flights).
    #[must_use]
    pub fn origin(mut self, origin: Place) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the destination or stay location (required).
    #[must_use]
    pub fn destination(mut self, destination: Place) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Set the travel dates (required).
    #[must_use]
    pub const fn dates(mut self, dates: DateRange) -> Self {
        self.dates = Some(dates);
        self
    }

    /// Set the traveller composition. Defaults to one adult, one room.
    #[must_use]
    pub const fn party(mut self, party: Party) -> Self {
        self.party = party;
        self
    }

    /// Set the target currency. Defaults to USD.
    #[must_use]
    pub const fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Set the presentation locale hint.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set result filters.
    #[must_use]
    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    /// Validate and freeze the request.
    ///
    /// # Errors
    /// Returns `ValidationError` when a required field is missing, a
    /// flight search lacks an origin, or a hotel search lacks a check-out
    /// date strictly after check-in.
    pub fn build(self) -> Result<SearchRequest, ValidationError> {
        let destination = self.destination.ok_or(ValidationError::Missing("destination"))?;
        let dates = self.dates.ok_or(ValidationError::Missing("dates"))?;

        match self.domain {
            TravelDomain::Flight => {
                if self.origin.is_none() {
                    return Err(ValidationError::Missing("origin"));
                }
            }
            TravelDomain::Hotel => match dates.end() {
                None => return Err(ValidationError::Dates("hotel stay needs a check-out".into())),
                Some(end) if end <= dates.start() => {
                    return Err(ValidationError::Dates("hotel stay needs at least one night".into()));
                }
                Some(_) => {}
            },
        }

        Ok(SearchRequest {
            domain: self.domain,
            origin: self.origin,
            destination,
            dates,
            party: self.party,
            currency: self.currency,
            locale: self.locale,
            filters: self.filters,
        })
    }
}
