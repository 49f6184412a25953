use crate::catalog::{
    filter::{FilterSelection, SlideDirection, visible_products},
    model::{Catalog, CategoryId, ColorId, Product, ProductId},
    swatch::CardSwatches,
};

/// Browse state for one mount of a catalog page.
///
/// Built fresh on every mount; dropping it is the "navigate away" reset.
#[derive(Clone, Debug)]
pub struct CatalogPage {
    catalog: Catalog,
    selection: FilterSelection,
    direction: SlideDirection,
    swatches: CardSwatches,
}

impl CatalogPage {
    /// Mount a page over the shared `catalog`, starting on `default_category`.
    pub fn mount(catalog: Catalog, default_category: CategoryId) -> Self {
        Self {
            catalog,
            selection: FilterSelection::new(default_category),
            direction: SlideDirection::Still,
            swatches: CardSwatches::new(),
        }
    }

    /// Current filters.
    pub fn selection(&self) -> FilterSelection {
        self.selection
    }

    /// Direction of the last category change.
    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    /// Per-card swatch state.
    pub fn swatches(&self) -> &CardSwatches {
        &self.swatches
    }

    /// The catalog this page displays.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Color bar click.
    pub fn select_color(&mut self, color: Option<ColorId>) {
        self.selection.set_active_color(color);
    }

    /// Category slider click.
    pub fn select_category(&mut self, category: CategoryId) -> SlideDirection {
        self.direction = self.selection.set_active_category(category);
        self.direction
    }

    /// Swatch click on a card. Unknown products and bad indices are ignored.
    pub fn select_swatch(&mut self, product_id: ProductId, index: usize) -> bool {
        match self.catalog.get(product_id) {
            Some(product) => self.swatches.select(product, index),
            None => {
                tracing::debug!(product = %product_id, "swatch click on unknown product");
                false
            }
        }
    }

    /// Products to render, in catalog order.
    pub fn visible(&self) -> Vec<&Product> {
        visible_products(&self.catalog, &self.selection)
    }

    /// `true` when the grid should show the empty-state affordance.
    pub fn is_empty_state(&self) -> bool {
        !self
            .catalog
            .products()
            .iter()
            .any(|p| self.selection.matches(p))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/page.rs"]
mod tests;
