//! Product validation rules.
//!
//! Field constraints are declared on [`Product`]; the custom rules that the
//! declarative attributes cannot express live here, together with the
//! data-level violation type callers inspect. A record is valid exactly when
//! its violation set is empty.

use std::{borrow::Cow, collections::BTreeSet};

use rust_decimal::Decimal;
use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::domain::products::models::Product;

/// Shortest non-empty description the catalog accepts.
pub const DESCRIPTION_MIN_LENGTH: usize = 50;

/// A single field-level constraint failure.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

/// Runs every field rule against the record and collects all failures.
///
/// Rules are independent: no field's validity depends on another field, and
/// evaluation never short-circuits. Violations are returned as data, never
/// raised as an error, and validation never mutates the record.
#[must_use]
pub fn validate_product(product: &Product) -> BTreeSet<Violation> {
    let Err(errors) = product.validate() else {
        return BTreeSet::new();
    };

    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, failures)| {
            failures.iter().map(move |failure| Violation {
                field: field.to_string(),
                message: failure
                    .message
                    .clone()
                    .map_or_else(|| failure.code.to_string(), Cow::into_owned),
            })
        })
        .collect()
}

/// Empty descriptions are allowed; anything else must carry enough text to
/// be useful on a product page.
pub(crate) fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.is_empty() || description.chars().count() >= DESCRIPTION_MIN_LENGTH {
        return Ok(());
    }

    Err(ValidationError::new("description_too_short"))
}

/// Prices are strictly positive and stay below 10000.
pub(crate) fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price > Decimal::ZERO && *price < Decimal::from(10_000) {
        return Ok(());
    }

    Err(ValidationError::new("price_out_of_range"))
}
