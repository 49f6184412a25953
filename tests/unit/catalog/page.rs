use super::*;
use crate::catalog::fixture::storefront_catalog;

#[test]
fn mount_starts_from_defaults() {
    let page = CatalogPage::mount(storefront_catalog(), CategoryId::Tshirt);
    assert_eq!(page.selection(), FilterSelection::new(CategoryId::Tshirt));
    assert_eq!(page.direction(), SlideDirection::Still);
    assert_eq!(page.visible().len(), 4);
    assert!(!page.is_empty_state());
}

#[test]
fn selections_drive_visibility() {
    let mut page = CatalogPage::mount(storefront_catalog(), CategoryId::Tshirt);
    page.select_color(Some(ColorId::Black));
    let ids: Vec<u32> = page.visible().iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![5]);

    assert_eq!(
        page.select_category(CategoryId::Hoodie),
        SlideDirection::Forward
    );
    assert_eq!(page.selection().active_color, Some(ColorId::Black));
    let ids: Vec<u32> = page.visible().iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![8]);

    page.select_category(CategoryId::Jacket);
    assert!(page.visible().is_empty());
    assert!(page.is_empty_state());
    assert_eq!(page.direction(), SlideDirection::Backward);
}

#[test]
fn swatch_clicks_do_not_change_filters() {
    let mut page = CatalogPage::mount(storefront_catalog(), CategoryId::Tshirt);
    let before = page.selection();
    assert!(page.select_swatch(ProductId(1), 1));
    assert!(!page.select_swatch(ProductId(99), 0));
    assert_eq!(page.selection(), before);

    let p1 = page.catalog().get(ProductId(1)).unwrap();
    assert_eq!(page.swatches().active_index(p1), 1);
}

#[test]
fn remount_forgets_state() {
    let catalog = storefront_catalog();
    let mut page = CatalogPage::mount(catalog.clone(), CategoryId::Tshirt);
    page.select_color(Some(ColorId::Olive));
    page.select_swatch(ProductId(3), 1);
    drop(page);

    let page = CatalogPage::mount(catalog, CategoryId::Tshirt);
    assert_eq!(page.selection().active_color, None);
    let p3 = page.catalog().get(ProductId(3)).unwrap();
    assert_eq!(page.swatches().active_index(p3), 0);
}
