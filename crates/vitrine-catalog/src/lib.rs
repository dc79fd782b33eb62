//! Vitrine Catalog — commerce entity snapshots and collaborator interfaces.
//!
//! This crate defines the read-only view of the commerce domain that the
//! document assembly engine consumes: products, SKUs, categories, catalogs,
//! brands, stores, price data, promotion rules, CM users, customers and
//! shipping service levels. Every type here is an immutable snapshot for the
//! duration of one document build; the engine never mutates source entities.
//!
//! The traits in [`lookup`] mark the boundary to the persistence layer.
//! Implementations are supplied by the host application and must be safe to
//! call from concurrently running indexing tasks.
//!
//! # Modules
//!
//! - [`attribute`]: Typed attribute values and their dispatch metadata
//! - [`catalog`]: Catalogs and brands
//! - [`category`]: Categories and their ancestor links
//! - [`localized`]: Locale-keyed display strings
//! - [`lookup`]: Collaborator traits (category, store, price, brand lookups)
//! - [`people`]: CM users and customers
//! - [`pricing`]: Money, prices, price lists and the batch price data source
//! - [`product`]: Products, bundles and constituents
//! - [`rule`]: Promotion rules
//! - [`shipping`]: Shipping service levels
//! - [`sku`]: Product SKUs and SKU options
//! - [`store`]: Stores

pub mod attribute;
pub mod catalog;
pub mod category;
pub mod localized;
pub mod lookup;
pub mod people;
pub mod pricing;
pub mod product;
pub mod rule;
pub mod shipping;
pub mod sku;
pub mod store;

pub use attribute::{Attribute, AttributeBinding, AttributeData, AttributeKind, AttributeValue};
pub use catalog::{Brand, Catalog};
pub use category::Category;
pub use localized::LocalizedString;
pub use lookup::{
    BrandLookup, CategoryLookup, PriceListAssignmentService, PriceLookupService, StoreService,
};
pub use people::{CmUser, Customer, CustomerAddress};
pub use pricing::{
    Money, Price, PriceDataSource, PriceDataSourceBuilder, PriceListAssignment,
    PriceListDescriptor, PriceListStack,
};
pub use product::{Bundle, BundleConstituent, ConstituentItem, Product};
pub use rule::Rule;
pub use shipping::ShippingServiceLevel;
pub use sku::{ProductSku, SkuOptionValue};
pub use store::Store;
