//! Products Service

use tracing::info;

use crate::domain::products::{
    errors::ProductsServiceError, models::Product, repository::ProductsRepository,
};

/// Application service over a products repository.
///
/// `save` trusts its input: callers are expected to have checked the record
/// with [`validate_product`] first, and the service performs no validation
/// of its own.
///
/// [`validate_product`]: crate::domain::products::validation::validate_product
#[derive(Debug, Clone)]
pub struct ProductsService<R> {
    repository: R,
}

impl<R: ProductsRepository> ProductsService<R> {
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Persists a product and returns the repository's result unchanged.
    #[tracing::instrument(name = "products.service.save", skip(self, product), err)]
    pub async fn save(&self, product: Product) -> Result<Product, ProductsServiceError> {
        let saved = self.repository.save(product).await?;

        info!(product_id = ?saved.id, "saved product");

        Ok(saved)
    }

    /// Retrieve a single product.
    #[tracing::instrument(name = "products.service.find_one", skip(self), err)]
    pub async fn find_one(&self, id: i64) -> Result<Product, ProductsServiceError> {
        self.repository
            .find_one(id)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    /// Retrieves all products.
    pub async fn find_all(&self) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self.repository.find_all().await?)
    }

    /// Deletes a product.
    #[tracing::instrument(name = "products.service.delete", skip(self), err)]
    pub async fn delete(&self, id: i64) -> Result<(), ProductsServiceError> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductsServiceError::NotFound);
        }

        info!(product_id = id, "deleted product");

        Ok(())
    }
}
