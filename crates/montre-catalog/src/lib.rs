#![deny(unsafe_code)]

pub mod bundle;
pub mod error;
pub mod filter;

pub use bundle::{Bundle, RegionEntry, bundle_dir};
pub use error::CatalogError;
pub use filter::FilteredCatalog;
