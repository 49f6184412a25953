//! The built-in storefront catalog shared by the home and products views.

use crate::{
    catalog::model::{Catalog, CategoryId, ColorId, Product, ProductId},
    foundation::core::{Price, Rgb8},
};

const WHITE: Rgb8 = Rgb8::new(0xf5, 0xf5, 0xf5);
const PURE_WHITE: Rgb8 = Rgb8::new(0xff, 0xff, 0xff);
const BLACK: Rgb8 = Rgb8::new(0x11, 0x11, 0x11);
const SAND: Rgb8 = Rgb8::new(0xd7, 0xc4, 0xa8);
const OLIVE: Rgb8 = Rgb8::new(0x6b, 0x7a, 0x4c);
const NAVY: Rgb8 = Rgb8::new(0x1e, 0x33, 0x5a);
const GRAY: Rgb8 = Rgb8::new(0x9a, 0x9a, 0x9a);

fn product(
    id: u32,
    name: &str,
    price_vnd: u64,
    colors: &[Rgb8],
    badge: Option<&str>,
    category: CategoryId,
    color: ColorId,
) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_owned(),
        price: Price::vnd(price_vnd),
        brand: "basic color".to_owned(),
        colors: colors.to_vec(),
        badge: badge.map(str::to_owned),
        category: Some(category),
        color: Some(color),
    }
}

/// Products behind [`storefront_catalog`], in display order.
pub fn storefront_products() -> Vec<Product> {
    use CategoryId::*;

    vec![
        product(
            1,
            "Basic Tee – Regular Fit",
            249_000,
            &[WHITE, BLACK, SAND],
            Some("Trắng"),
            Tshirt,
            ColorId::White,
        ),
        product(
            2,
            "Oversized Tee – Sand",
            299_000,
            &[SAND, OLIVE],
            Some("Be"),
            Tshirt,
            ColorId::Beige,
        ),
        product(
            3,
            "Heavyweight Tee – Olive",
            349_000,
            &[OLIVE, BLACK],
            Some("Olive"),
            Tshirt,
            ColorId::Olive,
        ),
        product(
            4,
            "Basic Polo – Navy",
            399_000,
            &[NAVY, PURE_WHITE],
            Some("Navy"),
            Polo,
            ColorId::Navy,
        ),
        product(
            5,
            "Essential Tee – Black",
            249_000,
            &[BLACK],
            Some("New"),
            Tshirt,
            ColorId::Black,
        ),
        product(
            6,
            "Straight Chinos – Sand",
            459_000,
            &[SAND, GRAY],
            None,
            Pants,
            ColorId::Beige,
        ),
        product(
            7,
            "Everyday Shorts – Gray",
            279_000,
            &[GRAY, BLACK],
            None,
            Shorts,
            ColorId::Gray,
        ),
        product(
            8,
            "Zip Hoodie – Black",
            549_000,
            &[BLACK, GRAY, NAVY],
            Some("Layer"),
            Hoodie,
            ColorId::Black,
        ),
    ]
}

/// The shared default catalog.
pub fn storefront_catalog() -> Catalog {
    Catalog::from_static(storefront_products())
}
