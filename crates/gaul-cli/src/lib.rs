//! gaul-cli
//! ========
//!
//! Command-line interface for the `gaul-core` administrative boundary table.
//!
//! This crate primarily provides a binary (`gaul-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows
//! this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install gaul-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! gaul-cli --help
//! gaul-cli stats
//! gaul-cli names --name singapore
//! gaul-cli names --name France --level 1
//! ```
//!
//! For programmatic access to the resolver and the table, use the
//! [`gaul-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/gaul-rs/gaul-rs>
//! - Core crate: <https://docs.rs/gaul-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
