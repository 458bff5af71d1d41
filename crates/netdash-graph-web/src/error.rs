use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("No window object available")]
    NoWindow,

    #[error("No document object available")]
    NoDocument,

    #[error("Container element '{0}' not found")]
    ContainerNotFound(String),

    #[error("2D canvas context unavailable")]
    ContextUnavailable,

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Invalid status snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Invalid graph config: {0}")]
    InvalidConfig(String),
}

impl WebError {
    pub(crate) fn dom(value: &JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
