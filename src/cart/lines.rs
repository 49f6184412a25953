use crate::{
    catalog::model::{Product, ProductId},
    foundation::{
        core::{Currency, Price, Rgb8},
        error::StoreResult,
    },
};

/// Identifier of one cart line, unique for the cart's lifetime.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct LineId(pub u64);

/// One product/swatch pair in the cart.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CartLine {
    /// Line identifier.
    pub line_id: LineId,
    /// Product this line was added from.
    pub product_id: ProductId,
    /// Product name at the time it was added.
    pub name: String,
    /// Unit price at the time it was added.
    pub unit_price: Price,
    /// Units ordered, always at least 1.
    pub quantity: u32,
    /// Chosen swatch, if the product offers any.
    pub swatch: Option<Rgb8>,
}

impl CartLine {
    /// `unit_price * quantity`.
    pub fn total(&self) -> StoreResult<Price> {
        self.unit_price.times(self.quantity)
    }
}

/// Ordered cart lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    next_line: u64,
}

impl Cart {
    /// Empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// `true` when nothing is in the cart.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` units of `product` in the swatch at `swatch_index`.
    ///
    /// Adding the same product and swatch again merges into the existing line.
    /// An out-of-range swatch index falls back to the first swatch, matching the
    /// product card. Returns the affected line, or `None` for a zero quantity.
    pub fn add(&mut self, product: &Product, swatch_index: usize, quantity: u32) -> Option<LineId> {
        if quantity == 0 {
            return None;
        }
        let swatch = product
            .colors
            .get(swatch_index)
            .or_else(|| product.colors.first())
            .copied();

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id && l.swatch == swatch)
        {
            line.quantity = line.quantity.saturating_add(quantity);
            tracing::debug!(
                line = line.line_id.0,
                quantity = line.quantity,
                "cart line merged"
            );
            return Some(line.line_id);
        }

        let line_id = LineId(self.next_line);
        self.next_line += 1;
        self.lines.push(CartLine {
            line_id,
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            swatch,
        });
        tracing::debug!(line = line_id.0, product = %product.id, quantity, "cart line added");
        Some(line_id)
    }

    /// Set a line's quantity; zero removes it. `false` when the line is unknown.
    pub fn update_quantity(&mut self, line_id: LineId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(line_id);
        }
        match self.lines.iter_mut().find(|l| l.line_id == line_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Drop a line. `false` when the line is unknown.
    pub fn remove(&mut self, line_id: LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.line_id != line_id);
        self.lines.len() != before
    }

    /// Total number of units across all lines.
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of line totals. Lines priced in different currencies cannot be summed.
    pub fn subtotal(&self) -> StoreResult<Price> {
        let mut lines = self.lines.iter();
        let Some(first) = lines.next() else {
            return Ok(Price::zero(Currency::default()));
        };
        lines.try_fold(first.total()?, |acc, l| acc.plus(l.total()?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cart/lines.rs"]
mod tests;
