/// Errors surfaced at the edges of the graph engine.
///
/// Drawing and input handling never fail; only parsing external documents does.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Invalid status snapshot: {0}")]
    InvalidSnapshot(#[source] serde_json::Error),

    #[error("Invalid graph config: {0}")]
    InvalidConfig(#[source] serde_json::Error),
}
