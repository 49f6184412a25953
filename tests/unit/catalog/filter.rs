use super::*;
use crate::catalog::fixture::storefront_catalog;

fn ids(products: &[&Product]) -> Vec<u32> {
    products.iter().map(|p| p.id.0).collect()
}

#[test]
fn tshirt_without_color_keeps_catalog_order() {
    let catalog = storefront_catalog();
    let sel = FilterSelection::new(CategoryId::Tshirt);
    assert_eq!(ids(&visible_products(&catalog, &sel)), vec![1, 2, 3, 5]);
}

#[test]
fn tshirt_black_is_only_the_black_tee() {
    let catalog = storefront_catalog();
    let sel = FilterSelection {
        active_color: Some(ColorId::Black),
        active_category: CategoryId::Tshirt,
    };
    assert_eq!(ids(&visible_products(&catalog, &sel)), vec![5]);
}

#[test]
fn hoodie_navy_is_empty_not_error() {
    let catalog = storefront_catalog();
    let sel = FilterSelection {
        active_color: Some(ColorId::Navy),
        active_category: CategoryId::Hoodie,
    };
    assert!(visible_products(&catalog, &sel).is_empty());
}

#[test]
fn setters_do_not_interact() {
    let mut sel = FilterSelection::new(CategoryId::Polo);
    sel.set_active_color(Some(ColorId::Olive));
    sel.set_active_category(CategoryId::Pants);
    assert_eq!(sel.active_color, Some(ColorId::Olive));
    sel.set_active_color(None);
    assert_eq!(sel.active_category, CategoryId::Pants);
}

#[test]
fn reselecting_is_idempotent() {
    let mut sel = FilterSelection::new(CategoryId::Shorts);
    sel.set_active_color(Some(ColorId::Gray));
    let before = sel;
    sel.set_active_color(Some(ColorId::Gray));
    assert_eq!(
        sel.set_active_category(CategoryId::Shorts),
        SlideDirection::Still
    );
    assert_eq!(sel, before);
}

#[test]
fn direction_is_sign_of_position_delta() {
    let mut sel = FilterSelection::new(CategoryId::Pants);
    assert_eq!(
        sel.set_active_category(CategoryId::Hoodie),
        SlideDirection::Forward
    );
    assert_eq!(
        sel.set_active_category(CategoryId::Tshirt),
        SlideDirection::Backward
    );
    assert_eq!(
        SlideDirection::between(CategoryId::Polo, CategoryId::Polo).signum(),
        0
    );
    assert_eq!(SlideDirection::Forward.signum(), 1);
    assert_eq!(SlideDirection::Backward.signum(), -1);
}

#[test]
fn untagged_products_match_nothing() {
    let mut products = crate::catalog::fixture::storefront_products();
    products[0].category = None;
    products[1].color = None;
    let catalog = Catalog::new(products).unwrap();

    let sel = FilterSelection::new(CategoryId::Tshirt);
    assert_eq!(ids(&visible_products(&catalog, &sel)), vec![2, 3, 5]);

    let beige = FilterSelection {
        active_color: Some(ColorId::Beige),
        active_category: CategoryId::Tshirt,
    };
    assert!(visible_products(&catalog, &beige).is_empty());
}

#[test]
fn string_ids_fall_back_to_empty() {
    let catalog = storefront_catalog();
    assert_eq!(
        ids(&visible_products_by_id(&catalog, "tshirt", Some("white"))),
        vec![1]
    );
    assert_eq!(
        ids(&visible_products_by_id(&catalog, "polo", None)),
        vec![4]
    );
    assert!(visible_products_by_id(&catalog, "dress", None).is_empty());
    assert!(visible_products_by_id(&catalog, "tshirt", Some("magenta")).is_empty());
}
