use serde::{Deserialize, Serialize};

use pos_core::{Money, ProductId};

/// Order line: product, quantity, unit price, and the derived line total.
///
/// Lines built through [`LineItem::new`] always satisfy
/// `line_total == unit_price × quantity` with `quantity > 0`. Deserialized
/// lines are not checked; the composer recomputes them when seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    product_id: ProductId,
    product_name: String,
    unit_price: Money,
    quantity: u32,
    line_total: Money,
}

impl LineItem {
    /// Returns `None` when `quantity` is zero or the line total overflows.
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Option<Self> {
        if quantity == 0 {
            return None;
        }
        let line_total = unit_price.checked_times(quantity)?;
        Some(Self {
            product_id,
            product_name: product_name.into(),
            unit_price,
            quantity,
            line_total,
        })
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Price captured when the line was first added.
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_total(&self) -> Money {
        self.line_total
    }

    /// Same line with a new quantity and recomputed total.
    pub(crate) fn with_quantity(&self, quantity: u32) -> Option<Self> {
        Self::new(
            self.product_id.clone(),
            self.product_name.clone(),
            self.unit_price,
            quantity,
        )
    }

    /// Rebuild from possibly inconsistent stored fields.
    pub(crate) fn recomputed(self) -> Option<Self> {
        Self::new(self.product_id, self.product_name, self.unit_price, self.quantity)
    }
}
