use serde::{Deserialize, Serialize};

use shop_core::{Entity, Searchable};

use crate::handle::ProductHandle;

/// Product identifier, assigned by the caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i32);

impl ProductId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for ProductId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Catalog product.
///
/// Equality covers every field. Title and price can change after construction;
/// the identifier cannot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    title: String,
    price: i64, // smallest currency unit
}

impl Product {
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: i64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title. Any string is accepted, including an empty one.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    /// Replace the price. Zero and negative prices are accepted.
    pub fn set_price(&mut self, price: i64) {
        self.price = price;
    }

    /// Move the product into a handle that can be stored and still edited by the caller.
    pub fn into_shared(self) -> ProductHandle {
        ProductHandle::new(self)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

// A plain product has no searchable facets.
impl Searchable for Product {}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.title, self.price)
    }
}
