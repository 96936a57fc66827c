#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("root element is <{found}>, expected <graphml>")]
    NotGraphml { found: String },

    #[error("GraphML document contains no <graph> element")]
    NoGraph,

    #[error("<{element}> is missing required attribute `{attribute}`")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("duplicate node id: {id}")]
    DuplicateNode { id: String },

    #[error("key `{key}` has unknown attr.type `{attr_type}`")]
    UnknownAttrType { key: String, attr_type: String },
}

pub type Result<T> = std::result::Result<T, Error>;
