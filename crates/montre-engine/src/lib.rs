#![deny(unsafe_code)]

pub mod configurator;
pub mod pricing;
pub mod rules;
pub mod selection;

pub use configurator::Configurator;
pub use pricing::{format_price, price};
pub use rules::validate;
pub use selection::{init, select};
