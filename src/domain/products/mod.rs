//! Products

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

pub use errors::{ParseProductStatusError, ProductsRepositoryError, ProductsServiceError};
pub use models::{Product, ProductStatus};
pub use repository::{InMemoryProductsRepository, ProductsRepository};
pub use service::ProductsService;
pub use validation::{Violation, validate_product};
