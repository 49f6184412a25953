use super::*;
use crate::foundation::core::Currency;

fn tee(id: u32) -> Product {
    Product {
        id: ProductId(id),
        name: format!("Tee {id}"),
        price: Price::vnd(100_000),
        brand: default_brand(),
        colors: vec![],
        badge: None,
        category: Some(CategoryId::Tshirt),
        color: Some(ColorId::White),
    }
}

#[test]
fn ids_round_trip_through_from_str() {
    for c in ColorId::ALL {
        assert_eq!(c.id().parse::<ColorId>().unwrap(), c);
    }
    for c in CategoryId::ALL {
        assert_eq!(c.id().parse::<CategoryId>().unwrap(), c);
    }
    assert!("purple".parse::<ColorId>().is_err());
    assert!("dress".parse::<CategoryId>().is_err());
}

#[test]
fn category_positions_follow_slider_order() {
    assert_eq!(CategoryId::Tshirt.position(), 0);
    assert_eq!(CategoryId::Hoodie.position(), 5);
    assert_eq!(CategoryId::default(), CategoryId::Tshirt);
}

#[test]
fn catalog_rejects_duplicate_ids() {
    let err = Catalog::new(vec![tee(1), tee(2), tee(1)]).unwrap_err();
    assert!(err.to_string().contains("duplicate product id 1"));
}

#[test]
fn catalog_preserves_order_and_lookup() {
    let c = Catalog::new(vec![tee(3), tee(1), tee(2)]).unwrap();
    let ids: Vec<u32> = c.products().iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(c.get(ProductId(1)).unwrap().name, "Tee 1");
    assert!(c.get(ProductId(9)).is_none());
    assert_eq!(c.len(), 3);
}

#[test]
fn json_unknown_or_missing_tags_become_none() {
    let json = r##"[
      { "id": 1, "name": "A", "price": { "amount_minor": 249000, "currency": "VND" },
        "colors": ["#f5f5f5"], "category": "tshirt", "color": "white" },
      { "id": 2, "name": "B", "price": { "amount_minor": 1999, "currency": "USD" },
        "category": "dress", "color": "magenta" },
      { "id": 3, "name": "C", "price": { "amount_minor": 1, "currency": "VND" } }
    ]"##;
    let c = Catalog::from_reader(json.as_bytes()).unwrap();
    let p = c.products();
    assert_eq!(p[0].category, Some(CategoryId::Tshirt));
    assert_eq!(p[0].color, Some(ColorId::White));
    assert_eq!(p[0].brand, "basic color");
    assert_eq!(p[1].category, None);
    assert_eq!(p[1].color, None);
    assert_eq!(p[1].price.currency, Currency::Usd);
    assert_eq!(p[2].category, None);
    assert!(p[2].colors.is_empty());
}

#[test]
fn json_syntax_errors_are_serde_errors() {
    let err = Catalog::from_reader("[{".as_bytes()).unwrap_err();
    assert!(matches!(err, StoreError::Serde(_)));
}

#[test]
fn missing_catalog_file_is_reported() {
    let err = Catalog::from_path(Path::new("definitely/not/here.json")).unwrap_err();
    assert!(err.to_string().contains("open catalog JSON"));
}
