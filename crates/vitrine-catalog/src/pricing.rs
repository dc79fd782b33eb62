//! Money, prices, price lists and the batch price data source.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::product::Product;

/// An amount of money in a specific currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount, scale preserved as configured on the price list.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

/// A resolved price: the lowest priced variant of an entity under one
/// price list, as determined by the external pricing/promotion lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    lowest: Money,
}

impl Price {
    /// Creates a price from its lowest money value.
    pub fn new(lowest: Money) -> Self {
        Self { lowest }
    }

    /// The lowest money value of this price.
    pub fn lowest_price(&self) -> &Money {
        &self.lowest
    }
}

/// Identity of a price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceListDescriptor {
    /// Stable price list guid, embedded into price field names.
    pub guid: String,
    /// ISO 4217 currency code of the list.
    pub currency_code: String,
}

/// Assignment of a price list to a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceListAssignment {
    /// The assigned price list.
    pub price_list: PriceListDescriptor,
}

/// An ordered stack of price list guids to resolve a price against.
///
/// Document assembly always builds single-entry stacks: one lookup per
/// price list assignment, so every assigned list gets its own price field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceListStack {
    /// Price list guids, highest priority first.
    pub price_list_guids: Vec<String>,
    /// Currency the stack resolves in.
    pub currency_code: String,
}

impl PriceListStack {
    /// Creates a single-entry stack for the given price list.
    pub fn single(descriptor: &PriceListDescriptor) -> Self {
        Self {
            price_list_guids: vec![descriptor.guid.clone()],
            currency_code: descriptor.currency_code.clone(),
        }
    }
}

/// A batch price data source scoped to one entity and a set of stores.
///
/// Built once per document build and reused for every (store, price list)
/// lookup, so price resolution stays on a single bulk query path instead of
/// one point query per pair. The engine treats it as opaque; lookup
/// implementations use the covered codes/guids to scope their bulk fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceDataSource {
    product_codes: BTreeSet<String>,
    price_list_guids: BTreeSet<String>,
}

impl PriceDataSource {
    /// Starts building a data source.
    pub fn builder() -> PriceDataSourceBuilder {
        PriceDataSourceBuilder::default()
    }

    /// Whether the data source covers the given product.
    pub fn covers_product(&self, product_code: &str) -> bool {
        self.product_codes.contains(product_code)
    }

    /// Whether the data source covers the given price list.
    pub fn covers_price_list(&self, guid: &str) -> bool {
        self.price_list_guids.contains(guid)
    }

    /// Number of price lists covered.
    pub fn price_list_count(&self) -> usize {
        self.price_list_guids.len()
    }
}

/// Builder collecting the products and price list assignments a
/// [`PriceDataSource`] must cover.
#[derive(Debug, Default)]
pub struct PriceDataSourceBuilder {
    source: PriceDataSource,
}

impl PriceDataSourceBuilder {
    /// Adds a product to the covered set.
    pub fn product(mut self, product: &Product) -> Self {
        self.source.product_codes.insert(product.code.clone());
        self
    }

    /// Adds every price list of the given assignments to the covered set.
    pub fn assignments(mut self, assignments: &[PriceListAssignment]) -> Self {
        for assignment in assignments {
            self.source
                .price_list_guids
                .insert(assignment.price_list.guid.clone());
        }
        self
    }

    /// Finishes the build.
    pub fn build(self) -> PriceDataSource {
        self.source
    }
}
