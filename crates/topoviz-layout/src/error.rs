#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("graph contains an edge with a missing endpoint: {edge_id}")]
    MissingEndpoint { edge_id: String },
    #[error("graph contains a duplicate node id: {node_id}")]
    DuplicateNode { node_id: String },
    #[error("layout root is not a node of the graph: {node_id}")]
    UnknownRoot { node_id: String },
    #[error("unknown layout algorithm: {name}")]
    UnknownLayout { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
