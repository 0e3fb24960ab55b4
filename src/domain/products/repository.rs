//! Products Repository

use std::collections::BTreeMap;

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::RwLock;

use crate::domain::products::{errors::ProductsRepositoryError, models::Product};

/// Persistence port for product records.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Persists the record and returns the stored form.
    async fn save(&self, product: Product) -> Result<Product, ProductsRepositoryError>;

    /// Retrieve a single product by id.
    async fn find_one(&self, id: i64) -> Result<Option<Product>, ProductsRepositoryError>;

    /// Retrieves all products.
    async fn find_all(&self) -> Result<Vec<Product>, ProductsRepositoryError>;

    /// Deletes a product by id, reporting whether a record was removed.
    async fn delete(&self, id: i64) -> Result<bool, ProductsRepositoryError>;
}

/// In-memory repository keyed by product id.
///
/// Records without an id are assigned the next sequential one on save.
#[derive(Debug, Default)]
pub struct InMemoryProductsRepository {
    products: RwLock<BTreeMap<i64, Product>>,
}

impl InMemoryProductsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductsRepository for InMemoryProductsRepository {
    async fn save(&self, product: Product) -> Result<Product, ProductsRepositoryError> {
        let mut products = self.products.write().await;

        let mut product = product;
        let id = match product.id {
            Some(id) => id,
            None => {
                let next = products.keys().next_back().map_or(1, |max| max + 1);
                product.id = Some(next);
                next
            }
        };

        products.insert(id, product.clone());

        Ok(product)
    }

    async fn find_one(&self, id: i64) -> Result<Option<Product>, ProductsRepositoryError> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, ProductsRepositoryError> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, ProductsRepositoryError> {
        Ok(self.products.write().await.remove(&id).is_some())
    }
}
