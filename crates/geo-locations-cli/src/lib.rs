//! geo-locations-cli
//! =================
//!
//! Command-line interface for the `geo-locations-core` reference dataset.
//!
//! This crate primarily provides a binary (`geo-locations`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install geo-locations-cli
//! geo-locations --help
//! geo-locations stats
//! geo-locations country US
//! geo-locations cities US CA
//! geo-locations --json complete IN
//! geo-locations --data-dir /srv/geo-data flag JP
//! ```
//!
//! For programmatic access use the [`geo-locations-core`] crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
