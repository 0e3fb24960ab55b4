//! Test Helpers

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::products::models::{Product, ProductStatus};

/// A fully populated record that passes every field rule.
pub(crate) fn sample_product() -> Product {
    Product {
        id: Some(1),
        title: Some("Valid Title".to_string()),
        keywords: None,
        description: None,
        rating: Some(5),
        quantity_in_stock: Some(10),
        dimensions: Some("10x10x10".to_string()),
        price: Some(Decimal::from(10)),
        status: Some(ProductStatus::InStock),
        weight: Some(1.0),
        date_added: Some(Timestamp::now()),
        date_modified: None,
    }
}
