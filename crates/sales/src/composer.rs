//! Order composition: the line items of one order being created or edited.
//!
//! A composer lives exactly as long as one open create/edit session. It is
//! seeded empty or from an existing [`Order`], mutated through the operations
//! below, and dropped on cancel or after a successful submit.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use pos_catalog::ProductLookup;
use pos_core::{CustomerId, DomainError, Entity, Money, OrderId, ProductId};
use pos_parties::CustomerRef;

use crate::line_item::LineItem;
use crate::order::{Order, OrderStatus, PaymentMethod, WALK_IN_CUSTOMER};

/// Rejected composition input. The composer is left unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompositionError {
    #[error("product {0} is unknown or out of stock")]
    MissingProduct(ProductId),

    #[error("quantity must be a positive integer")]
    InvalidQuantity,

    #[error("At least one item is required")]
    EmptyOrder,

    #[error("Customer information is required")]
    MissingCustomerIdentity,

    #[error("line {index} does not exist (order has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },
}

impl From<CompositionError> for DomainError {
    fn from(value: CompositionError) -> Self {
        DomainError::validation(value.to_string())
    }
}

/// Outcome of [`OrderComposer::validate`].
///
/// Both conditions are reported independently so a form can show both
/// messages at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftValidation {
    pub missing_items: bool,
    pub missing_customer: bool,
}

impl DraftValidation {
    pub fn is_valid(&self) -> bool {
        !self.missing_items && !self.missing_customer
    }

    pub fn errors(&self) -> Vec<CompositionError> {
        let mut errors = Vec::new();
        if self.missing_items {
            errors.push(CompositionError::EmptyOrder);
        }
        if self.missing_customer {
            errors.push(CompositionError::MissingCustomerIdentity);
        }
        errors
    }

    pub fn into_result(self) -> Result<(), DraftValidation> {
        if self.is_valid() { Ok(()) } else { Err(self) }
    }
}

impl core::fmt::Display for DraftValidation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let messages: Vec<String> = self.errors().iter().map(ToString::to_string).collect();
        if messages.is_empty() {
            f.write_str("valid")
        } else {
            f.write_str(&messages.join("; "))
        }
    }
}

/// Line items of one in-progress order.
///
/// Invariant: at most one line per product id, in first-insertion order.
/// Totals are never cached; [`OrderComposer::total`] always sums the current
/// lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderComposer {
    items: Vec<LineItem>,
}

impl OrderComposer {
    /// Empty composer for a new order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Composer seeded from an existing order, for editing it.
    pub fn from_order(order: &Order) -> Self {
        Self::from_items(order.items.iter().cloned())
    }

    /// Seed from raw lines. Duplicate products are merged onto the first
    /// occurrence and every line total is recomputed from its unit price.
    /// Lines that are empty or would overflow the order total are dropped.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut composer = Self::new();
        for item in items {
            let product_id = item.product_id().clone();
            if composer.seed(item).is_none() {
                warn!(product = %product_id, "dropped unusable line while seeding order");
            }
        }
        composer
    }

    fn seed(&mut self, item: LineItem) -> Option<usize> {
        match self.position(item.product_id()) {
            Some(index) => {
                let merged = self.items[index].quantity().checked_add(item.quantity())?;
                let line = self.items[index].with_quantity(merged)?;
                self.put(Some(index), line)
            }
            None => self.put(None, item.recomputed()?),
        }
    }

    /// Store `line` at `index`, or append it, if the order total still fits.
    /// Returns the line's position; `None` leaves the composer unchanged.
    fn put(&mut self, index: Option<usize>, line: LineItem) -> Option<usize> {
        let others = self
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != index)
            .map(|(_, l)| l.line_total());
        Money::checked_sum(others)?.checked_add(line.line_total())?;

        match index {
            Some(index) => {
                self.items[index] = line;
                Some(index)
            }
            None => {
                self.items.push(line);
                Some(self.items.len() - 1)
            }
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.product_id() == product_id)
    }

    /// Add `quantity` of a catalog product.
    ///
    /// An existing line for the product grows by `quantity`, keeping the unit
    /// price captured when it was first added. The merged quantity is not
    /// checked against the catalog's available stock. Otherwise a new line is
    /// appended. A quantity or total that does not fit is `InvalidQuantity`.
    pub fn add_item<C>(
        &mut self,
        catalog: &C,
        product_id: &ProductId,
        quantity: Option<i64>,
    ) -> Result<&LineItem, CompositionError>
    where
        C: ProductLookup + ?Sized,
    {
        let quantity = positive_quantity(quantity)?;
        let product = catalog
            .find(product_id)
            .ok_or_else(|| CompositionError::MissingProduct(product_id.clone()))?;

        let index = match self.position(product_id) {
            Some(index) => {
                let merged = self.items[index]
                    .quantity()
                    .checked_add(quantity)
                    .ok_or(CompositionError::InvalidQuantity)?;
                let line = self.items[index]
                    .with_quantity(merged)
                    .ok_or(CompositionError::InvalidQuantity)?;
                let index = self
                    .put(Some(index), line)
                    .ok_or(CompositionError::InvalidQuantity)?;
                debug!(product = %product_id, quantity = merged, "merged order line");
                index
            }
            None => {
                let line = LineItem::new(
                    product.id().clone(),
                    product.name(),
                    product.unit_price(),
                    quantity,
                )
                .ok_or(CompositionError::InvalidQuantity)?;
                let index = self
                    .put(None, line)
                    .ok_or(CompositionError::InvalidQuantity)?;
                debug!(product = %product_id, quantity, "appended order line");
                index
            }
        };
        Ok(&self.items[index])
    }

    /// Set the quantity of the line at `index`; `quantity <= 0` removes it.
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> Result<(), CompositionError> {
        let len = self.items.len();
        if index >= len {
            return Err(CompositionError::LineOutOfRange { index, len });
        }
        if quantity <= 0 {
            self.remove_item(index);
            return Ok(());
        }

        let quantity = u32::try_from(quantity).map_err(|_| CompositionError::InvalidQuantity)?;
        let line = self.items[index]
            .with_quantity(quantity)
            .ok_or(CompositionError::InvalidQuantity)?;
        self.put(Some(index), line)
            .map(|_| ())
            .ok_or(CompositionError::InvalidQuantity)
    }

    /// Remove the line at `index`; `None` if there is no such line.
    pub fn remove_item(&mut self, index: usize) -> Option<LineItem> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        debug!(product = %removed.product_id(), index, "removed order line");
        Some(removed)
    }

    /// Sum of all line totals.
    pub fn total(&self) -> Money {
        // Every insert goes through `put`, which rejects a total past u64::MAX,
        // and removals only shrink it.
        Money::checked_sum(self.items.iter().map(LineItem::line_total))
            .unwrap_or_else(|| unreachable!("order total exceeds u64::MAX"))
    }

    /// Check the draft is ready to submit.
    ///
    /// A whitespace-only fallback name counts as missing.
    pub fn validate(
        &self,
        customer_id: Option<&CustomerId>,
        customer_name_fallback: &str,
    ) -> DraftValidation {
        DraftValidation {
            missing_items: self.items.is_empty(),
            missing_customer: customer_id.is_none() && customer_name_fallback.trim().is_empty(),
        }
    }

    /// Materialize the draft as an order.
    ///
    /// The display name is the resolved customer's, else the trimmed fallback,
    /// else [`WALK_IN_CUSTOMER`]. The total is computed once, here.
    pub fn to_order(
        &self,
        id: OrderId,
        order_date: NaiveDate,
        status: OrderStatus,
        payment_method: PaymentMethod,
        customer: Option<&CustomerRef>,
        customer_name_fallback: &str,
    ) -> Order {
        let customer_name = customer
            .map(|c| c.name.trim())
            .filter(|name| !name.is_empty())
            .or_else(|| Some(customer_name_fallback.trim()).filter(|name| !name.is_empty()))
            .unwrap_or(WALK_IN_CUSTOMER)
            .to_owned();

        Order {
            id,
            customer_id: customer.map(|c| c.id.clone()),
            customer_name,
            items: self.items.clone(),
            total_amount: self.total(),
            order_date,
            status,
            payment_method,
        }
    }

    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }
}

fn positive_quantity(quantity: Option<i64>) -> Result<u32, CompositionError> {
    match quantity {
        Some(q) if q > 0 => u32::try_from(q).map_err(|_| CompositionError::InvalidQuantity),
        _ => Err(CompositionError::InvalidQuantity),
    }
}
