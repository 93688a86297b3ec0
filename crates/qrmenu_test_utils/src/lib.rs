//! QR Menu Test Utilities
//!
//! Fixtures are expressed in the retrieval service's wire format (`urunAdi`,
//! `grupIsim`, `ustGrupIsim`, ...) so every test also exercises payload decoding.
//!
//! # Usage
//!
//! ```rust,ignore
//! use qrmenu_test_utils::{product_payload, ProductFixture, TempPayload};
//!
//! let payload = product_payload(vec![
//!     ProductFixture::new("Mercimek", "Çorbalar").top("Yemekler").build(),
//! ]);
//! let file = TempPayload::write("products.json", &payload).unwrap();
//! // pass file.path() to the CLI; the directory is removed on Drop
//! ```

pub mod catalogs;
pub mod files;

pub use catalogs::{
    business_payload, flat_catalog, hierarchical_catalog, orphan_catalog, product_payload,
    ProductFixture,
};
pub use files::TempPayload;
