//! Product Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::products::{
    errors::ParseProductStatusError,
    validation::{validate_description, validate_price},
};

/// Catalog lifecycle state of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    InStock,
    OutOfStock,
    Preorder,
    Discontinued,
}

impl ProductStatus {
    /// Canonical label, as stored and exchanged with other systems.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "IN_STOCK",
            Self::OutOfStock => "OUT_OF_STOCK",
            Self::Preorder => "PREORDER",
            Self::Discontinued => "DISCONTINUED",
        }
    }
}

impl Display for ProductStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = ParseProductStatusError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "IN_STOCK" => Ok(Self::InStock),
            "OUT_OF_STOCK" => Ok(Self::OutOfStock),
            "PREORDER" => Ok(Self::Preorder),
            "DISCONTINUED" => Ok(Self::Discontinued),
            other => Err(ParseProductStatusError(other.to_string())),
        }
    }
}

/// Product Record
///
/// Required fields stay `Option` so a record can be built unvalidated and
/// every absence is reported as a violation rather than a construction
/// failure. Field rules are declared here; [`validate_product`] collects
/// every failure without short-circuiting.
///
/// [`validate_product`]: crate::domain::products::validation::validate_product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Assigned by the persistence layer, never validated.
    pub id: Option<i64>,

    #[validate(
        required(message = "title is required"),
        length(min = 3, max = 100, message = "title must be between 3 and 100 characters")
    )]
    pub title: Option<String>,

    #[validate(length(max = 200, message = "keywords must be at most 200 characters"))]
    pub keywords: Option<String>,

    #[validate(custom(
        function = validate_description,
        message = "description must be empty or at least 50 characters"
    ))]
    pub description: Option<String>,

    #[validate(range(min = 1, max = 10, message = "rating must be between 1 and 10"))]
    pub rating: Option<i32>,

    #[validate(
        required(message = "quantity in stock is required"),
        range(min = 0, message = "quantity in stock cannot be negative")
    )]
    pub quantity_in_stock: Option<i32>,

    #[validate(length(max = 50, message = "dimensions must be at most 50 characters"))]
    pub dimensions: Option<String>,

    #[validate(
        required(message = "price is required"),
        custom(
            function = validate_price,
            message = "price must be greater than 0 and less than 10000"
        )
    )]
    pub price: Option<Decimal>,

    #[validate(required(message = "status is required"))]
    pub status: Option<ProductStatus>,

    #[validate(range(min = 0.0, message = "weight cannot be negative"))]
    pub weight: Option<f64>,

    #[validate(required(message = "date added is required"))]
    pub date_added: Option<Timestamp>,

    pub date_modified: Option<Timestamp>,
}
