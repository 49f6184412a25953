use std::collections::HashMap;

use crate::{
    catalog::model::{Product, ProductId},
    foundation::core::Rgb8,
};

/// Per-card active swatch index, keyed by product id.
///
/// Each card owns its entry; cards never observe each other's selection and
/// nothing here touches the catalog filters. Missing entries read as 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardSwatches {
    active: HashMap<ProductId, usize>,
}

impl CardSwatches {
    /// Empty state: every card on its first swatch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Active swatch index of `product`'s card.
    pub fn active_index(&self, product: &Product) -> usize {
        match self.active.get(&product.id) {
            Some(&i) if i < product.colors.len() => i,
            _ => 0,
        }
    }

    /// Active swatch color, `None` if the product lists no colors.
    pub fn active_swatch(&self, product: &Product) -> Option<Rgb8> {
        product.colors.get(self.active_index(product)).copied()
    }

    /// Select swatch `index` on `product`'s card.
    ///
    /// Out-of-range indices are ignored and return `false`.
    pub fn select(&mut self, product: &Product, index: usize) -> bool {
        if index >= product.colors.len() {
            tracing::debug!(
                product = %product.id,
                index,
                len = product.colors.len(),
                "swatch index out of range, ignored"
            );
            return false;
        }
        self.active.insert(product.id, index);
        true
    }
}

/// Swatch controls only show when there is a choice to make.
pub fn shows_swatch_controls(product: &Product) -> bool {
    product.colors.len() >= 2
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/swatch.rs"]
mod tests;
