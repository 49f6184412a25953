use std::cmp::Ordering;

use crate::catalog::model::{Catalog, CategoryId, ColorId, Product};

/// Active color and category filters of a catalog view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FilterSelection {
    /// `None` means no color restriction.
    pub active_color: Option<ColorId>,
    /// Always set; starts at the view's default category.
    pub active_category: CategoryId,
}

/// Direction hint for the category slide transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum SlideDirection {
    /// Moved left in the category ordering.
    Backward,
    /// Re-selected the active category.
    #[default]
    Still,
    /// Moved right in the category ordering.
    Forward,
}

impl SlideDirection {
    /// `sign(new_index - old_index)` for two positions in the category order.
    pub fn between(old: CategoryId, new: CategoryId) -> Self {
        match new.position().cmp(&old.position()) {
            Ordering::Less => Self::Backward,
            Ordering::Equal => Self::Still,
            Ordering::Greater => Self::Forward,
        }
    }

    /// Signed step: `-1`, `0` or `+1`.
    pub fn signum(self) -> i32 {
        match self {
            Self::Backward => -1,
            Self::Still => 0,
            Self::Forward => 1,
        }
    }
}

impl FilterSelection {
    /// Selection with no color filter on `category`.
    pub fn new(category: CategoryId) -> Self {
        Self {
            active_color: None,
            active_category: category,
        }
    }

    /// Overwrite the color filter. Leaves the category untouched.
    pub fn set_active_color(&mut self, color: Option<ColorId>) {
        self.active_color = color;
    }

    /// Overwrite the category filter and report which way the slider moved.
    /// Leaves the color filter untouched.
    pub fn set_active_category(&mut self, category: CategoryId) -> SlideDirection {
        let direction = SlideDirection::between(self.active_category, category);
        self.active_category = category;
        direction
    }

    /// Whether `product` survives this selection.
    pub fn matches(&self, product: &Product) -> bool {
        product.category == Some(self.active_category)
            && self
                .active_color
                .is_none_or(|color| product.color == Some(color))
    }
}

/// Stable sub-sequence of `catalog` visible under `selection`.
///
/// An empty result is the empty state, not an error.
pub fn visible_products<'a>(catalog: &'a Catalog, selection: &FilterSelection) -> Vec<&'a Product> {
    catalog
        .products()
        .iter()
        .filter(|p| selection.matches(p))
        .collect()
}

/// String-keyed variant of [`visible_products`]; unknown ids select nothing.
pub fn visible_products_by_id<'a>(
    catalog: &'a Catalog,
    category: &str,
    color: Option<&str>,
) -> Vec<&'a Product> {
    let Ok(active_category) = category.parse::<CategoryId>() else {
        tracing::debug!(category, "unknown category id, empty result");
        return Vec::new();
    };
    let active_color = match color.map(str::parse::<ColorId>) {
        None => None,
        Some(Ok(c)) => Some(c),
        Some(Err(_)) => {
            tracing::debug!(?color, "unknown color id, empty result");
            return Vec::new();
        }
    };
    visible_products(
        catalog,
        &FilterSelection {
            active_color,
            active_category,
        },
    )
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/filter.rs"]
mod tests;
