use std::cell::RefCell;
use std::rc::Rc;

use shop_core::{Entity, Searchable};

use crate::product::{Product, ProductId};

/// Shared, editable reference to a product.
///
/// Clones point at the same product: an edit made through one clone is seen by
/// all of them, including the clone held by a repository. Only title and price
/// can be edited. The product itself is never handed out mutably, so the
/// identifier captured at construction always matches the stored product.
///
/// Single-threaded (`!Send`).
#[derive(Debug, Clone)]
pub struct ProductHandle {
    id: ProductId,
    product: Rc<RefCell<Product>>,
}

impl ProductHandle {
    pub fn new(product: Product) -> Self {
        Self {
            id: product.id_typed(),
            product: Rc::new(RefCell::new(product)),
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn title(&self) -> String {
        self.product.borrow().title().to_string()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.product.borrow_mut().set_title(title);
    }

    pub fn price(&self) -> i64 {
        self.product.borrow().price()
    }

    pub fn set_price(&self, price: i64) {
        self.product.borrow_mut().set_price(price);
    }

    /// Detached copy of the product as it is right now.
    pub fn snapshot(&self) -> Product {
        self.product.borrow().clone()
    }

    /// `true` when both handles refer to the same product.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.product, &b.product)
    }
}

impl From<Product> for ProductHandle {
    fn from(product: Product) -> Self {
        Self::new(product)
    }
}

/// Handles compare by the current product value, not by reference.
impl PartialEq for ProductHandle {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || *self.product.borrow() == *other.product.borrow()
    }
}

impl Eq for ProductHandle {}

impl PartialEq<Product> for ProductHandle {
    fn eq(&self, other: &Product) -> bool {
        *self.product.borrow() == *other
    }
}

impl Entity for ProductHandle {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Searchable for ProductHandle {
    fn matches(&self, query: &str) -> bool {
        self.product.borrow().matches(query)
    }
}

impl core::fmt::Display for ProductHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&*self.product.borrow(), f)
    }
}
