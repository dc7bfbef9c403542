//! # apexdoc
//!
//! Resolves dotted Apex identifiers (`Namespace.Class.method`) against the
//! table of contents of the Apex reference guide and opens, prints or lists
//! the matching documentation.
//!
//! ```bash
//! apexdoc List                      # open the List class page
//! apexdoc System.List.add --show-url
//! apexdoc System.List --show-methods
//! ```
//!
//! ## Module Overview
//!
//! - [`toc`] - Table-of-contents data model and loading
//! - [`resolver`] - Namespace, class and member lookup
//! - [`node`] - Borrowed node views with parent links
//! - [`path`] - Dotted query paths
//! - [`app`] - Output modes
//! - [`config`] - CLI arguments and config file
//! - [`logging`] - Tracing subscriber set-up

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod matching;
pub mod node;
pub mod opener;
pub mod path;
pub mod resolver;
pub mod toc;

pub use app::Mode;
pub use config::{Cli, Config};
pub use error::{ApexDocError, EntityKind, Result};
pub use node::NodeRef;
pub use opener::{Opener, SystemOpener};
pub use path::QueryPath;
pub use resolver::{Resolved, Resolver, ResolverSettings, Target};
pub use toc::{DocumentTree, Node};
