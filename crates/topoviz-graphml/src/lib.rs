#![forbid(unsafe_code)]

//! GraphML reader producing an attributed, index-based graph model.
//!
//! Every vertex carries an `id` string attribute holding its `<node id="...">`. Declared
//! `<key>` attributes are present on every entity of their domain, filled with the declared
//! `<default>` or the type's missing value.

pub mod error;
pub mod model;
mod reader;

pub use error::{Error, Result};
pub use model::{AttrValue, Attributes, Edge, Graph, Vertex};
pub use reader::{GRAPHML_NS, read_graphml, read_graphml_file};
