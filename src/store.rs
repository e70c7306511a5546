use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::models::Product;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("product {0} not found")]
    NotFound(String),

    #[error("product id {0} already exists")]
    DuplicateId(String),

    #[error("product store lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// In-memory product collection shared by every request.
///
/// Each method holds the lock for exactly one operation, so concurrent
/// requests interleave at whole-operation granularity.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Store holding the fixed set of products every process starts with.
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    pub fn list_all(&self) -> StoreResult<Vec<Product>> {
        Ok(self.read()?.clone())
    }

    pub fn find_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        Ok(self.read()?.iter().find(|p| p.id == id).cloned())
    }

    pub fn insert(&self, product: Product) -> StoreResult<()> {
        let mut products = self.write()?;
        if products.iter().any(|p| p.id == product.id) {
            return Err(StoreError::DuplicateId(product.id));
        }
        products.push(product);
        Ok(())
    }

    pub fn replace(&self, id: &str, product: Product) -> StoreResult<()> {
        let mut products = self.write()?;
        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        *slot = product;
        Ok(())
    }

    pub fn remove_by_id(&self, id: &str) -> StoreResult<Product> {
        let mut products = self.write()?;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(products.remove(index))
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Product>>> {
        self.products.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Product>>> {
        self.products.write().map_err(|_| StoreError::Poisoned)
    }
}

fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".into(),
            name: "Laptop".into(),
            description: Some("High-performance laptop with 16GB RAM".into()),
            price: 1200.0,
            category: "Electronics".into(),
            in_stock: true,
        },
        Product {
            id: "2".into(),
            name: "Smartphone".into(),
            description: Some("Latest model with 128GB storage".into()),
            price: 800.0,
            category: "Electronics".into(),
            in_stock: true,
        },
        Product {
            id: "3".into(),
            name: "Coffee Maker".into(),
            description: Some("Programmable coffee maker with timer".into()),
            price: 50.0,
            category: "Kitchen".into(),
            in_stock: false,
        },
    ]
}
