//! Search-document assembly for Vitrine catalogs.
//!
//! This crate transforms commerce entity snapshots into flattened, locale-
//! and store-scoped documents ready for ingestion by a full-text search
//! index. It is a pure in-process transform: the outer indexing pipeline
//! feeds entities in, this engine hands finished [`IndexDocument`]s back.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       vitrine-index                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  DocumentAssembler + DocumentSource strategies              │
//! │  ├── ProductDocuments        ├── CmUserDocuments            │
//! │  ├── SkuDocuments            ├── CustomerDocuments          │
//! │  ├── CategoryDocuments       └── ShippingServiceLevel-      │
//! │  └── RuleDocuments               Documents                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  AvailabilityResolver (catalog availability over ancestors) │
//! │  PriceFieldAssembler  (batched lowest-price resolution)     │
//! │  LocaleFieldExpander  (per-locale + sortable field fan-out) │
//! │  ConstituentFlattener (bundle trees into one document)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  IndexDocument (field writer)   fields (scoped field names) │
//! │  TokenAnalyzer (value → token)  IndexingPass (caches, tally)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Concurrency
//!
//! One document build is single-threaded and synchronous. Many builds may
//! run in parallel across task instances; the lookup traits they share are
//! `Send + Sync`, and each task owns its own [`IndexingPass`]. Nothing here
//! is retained across entities except the per-pass caches on that context.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_index::{DocumentAssembler, IndexingPass, ProductDocuments, Services};
//!
//! let assembler = DocumentAssembler::new(services);
//! let mut pass = IndexingPass::new();
//! for product in batch {
//!     match assembler.assemble(&ProductDocuments, Some(&product), &mut pass) {
//!         Ok(Some(doc)) => sink.submit(doc)?,
//!         Ok(None) => {}
//!         Err(err) => log::error!("Skipping product: {err}"),
//!     }
//! }
//! ```

pub mod analyzer;
pub mod assembler;
pub mod availability;
pub mod constituents;
pub mod context;
pub mod document;
pub mod fields;
pub mod locales;
pub mod pricing;

pub use analyzer::{TokenAnalyzer, ValueAnalyzer};
pub use assembler::{
    CategoryDocuments, CmUserDocuments, CustomerDocuments, DocumentAssembler, DocumentSource,
    ProductDocuments, RuleDocuments, Services, ShippingServiceLevelDocuments, SkuDocuments,
    SkuEntity,
};
pub use availability::{AvailabilityReport, AvailabilityResolver, CatalogEntry};
pub use constituents::ConstituentFlattener;
pub use context::{IndexingPass, PassMetrics};
pub use document::IndexDocument;
pub use locales::LocaleFieldExpander;
pub use pricing::{PriceFieldAssembler, PriceFieldKey};
