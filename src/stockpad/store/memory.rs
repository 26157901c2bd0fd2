use super::{parse_catalog, render_catalog, DataStore, LoadReport};
use crate::error::Result;
use crate::model::Product;

/// Keeps the serialized catalog text in memory. `None` means nothing was ever saved.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    content: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw catalog text, header included.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            saves: 0,
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<LoadReport> {
        Ok(match &self.content {
            Some(text) => parse_catalog(text),
            None => LoadReport::default(),
        })
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        self.content = Some(render_catalog(products));
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::Product;

    pub fn product(id: u32, name: &str, price: f64, quantity: u32) -> Product {
        Product::new(id, name.to_string(), "General".to_string(), price, quantity)
            .expect("fixture product must be valid")
    }

    pub struct CatalogFixture {
        pub products: Vec<Product>,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                products: Vec::new(),
            }
        }

        pub fn with(mut self, id: u32, name: &str, price: f64, quantity: u32) -> Self {
            self.products.push(product(id, name, price, quantity));
            self
        }

        /// Widget, Gadget and Sprocket with distinct prices and quantities.
        pub fn standard() -> Self {
            Self::new()
                .with(1, "Widget", 9.99, 100)
                .with(2, "Gadget", 19.95, 50)
                .with(3, "Sprocket", 4.5, 250)
        }

        pub fn build(self) -> Vec<Product> {
            self.products
        }
    }
}
