//! Catalog walkthrough against the public API.

use shop_core::DomainError;
use shop_infra::repository::{Repository, ShopRepository};
use shop_products::{Product, ProductHandle, ProductId};

#[test]
fn catalog_lifecycle() {
    let mut repo = ShopRepository::new();
    assert!(repo.find_all().is_empty());

    let socks = Product::new(1, "Socks", 80).into_shared();
    let jacket = Product::new(2, "Jacket", 2000).into_shared();
    let book = Product::new(3, "Book", 250).into_shared();

    repo.add(socks.clone()).unwrap();
    repo.add(jacket.clone()).unwrap();
    repo.add(book.clone()).unwrap();
    assert_eq!(
        repo.find_all(),
        vec![socks.clone(), jacket.clone(), book.clone()]
    );

    repo.remove_by_id(&ProductId(2)).unwrap();
    assert_eq!(repo.find_all(), vec![socks.clone(), book.clone()]);

    let err = repo.remove_by_id(&ProductId(4)).unwrap_err();
    assert_eq!(err, DomainError::NotFound("4".to_string()));
    assert_eq!(err.to_string(), "Element with id: 4 not found");

    let err = repo
        .add(Product::new(1, "Phone", 10_000).into_shared())
        .unwrap_err();
    assert_eq!(err, DomainError::AlreadyExists("1".to_string()));
    assert_eq!(err.to_string(), "Element with id: 1 already exists");

    assert_eq!(repo.find_all(), vec![socks, book]);
}

#[test]
fn lookup_compares_by_value() {
    let mut repo = ShopRepository::new();
    repo.add(Product::new(1, "Socks", 80).into_shared()).unwrap();
    repo.add(Product::new(2, "Jacket", 2000).into_shared()).unwrap();

    let found = repo.find_by_id(&ProductId(2)).unwrap();
    assert_eq!(found.snapshot(), Product::new(2, "Jacket", 2000));
    assert!(repo.find_by_id(&ProductId(3)).is_none());
}

#[test]
fn works_through_the_trait_object() {
    let mut repo: Box<dyn Repository<ProductHandle>> = Box::new(ShopRepository::default());
    repo.add(Product::new(7, "Scarf", 300).into_shared()).unwrap();

    assert_eq!(repo.find_all().len(), 1);
    assert!(repo.find_by_id(&ProductId(7)).is_some());
    repo.remove_by_id(&ProductId(7)).unwrap();
    assert!(repo.find_all().is_empty());
}

#[test]
fn edited_products_keep_their_slot() {
    let mut repo = ShopRepository::new();
    let socks = Product::new(1, "Socks", 80).into_shared();
    repo.add(socks.clone()).unwrap();
    repo.add(Product::new(2, "Jacket", 2000).into_shared()).unwrap();

    socks.set_title("Phone");
    socks.set_price(10_000);

    let err = repo
        .add(Product::new(1, "Phone", 10_000).into_shared())
        .unwrap_err();
    assert_eq!(err, DomainError::AlreadyExists("1".to_string()));
    assert_eq!(repo.find_by_id(&ProductId(1)), Some(socks.clone()));

    repo.remove_by_id(&ProductId(1)).unwrap();
    assert!(repo.find_by_id(&ProductId(1)).is_none());
    assert_eq!(repo.find_all().len(), 1);
}
