//! kata-rs: small, self-contained string and data katas
//!
//! Goals:
//! - Every function is pure and independent of the others
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: build a CSS selector
//! ```
//! use kata_rs::selector::{CssSelectorBuilder as css, Render};
//!
//! let sel = css::combine(
//!     css::element("div").id("main").unwrap().class("container").class("draggable"),
//!     "+",
//!     css::combine(
//!         css::element("table").id("data").unwrap(),
//!         "~",
//!         css::combine(
//!             css::element("tr").pseudo_class("nth-of-type(even)"),
//!             " ",
//!             css::element("td").pseudo_class("nth-of-type(even)"),
//!         ).unwrap(),
//!     ).unwrap(),
//! ).unwrap();
//! assert_eq!(
//!     sel.render(),
//!     "div#main.container.draggable + table#data ~ tr:nth-of-type(even) td:nth-of-type(even)"
//! );
//! ```
//!
//! ## Quick start: read a scanned account number
//! ```
//! let scan = concat!(
//!     "    _  _     _  _  _  _  _ \n",
//!     "  | _| _||_||_ |_   ||_||_|\n",
//!     "  ||_  _|  | _||_|  ||_| _|\n",
//! );
//! assert_eq!(kata_rs::glyph::decode(scan).unwrap(), 123456789);
//! ```

pub mod cards;
pub mod figure;
pub mod glyph;
pub mod json;
pub mod poker;
pub mod selector;
pub mod shape;
pub mod wrap;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
