//! Shared navigation model of the site header.
//!
//! Everything here is plain data plus pure functions so both the wasm
//! frontend and the static server can depend on it.

pub mod catalog;
pub mod config;
pub mod model;
pub mod route;

pub use catalog::default_product_groups;
pub use config::{Brand, HeaderConfig, HeaderConfigError};
pub use model::{NavLink, ProductGroup, ProductSelection};
pub use route::{is_active, is_products_section, RouteHighlighter};
