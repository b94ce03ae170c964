/// One event of a streamed synthesis response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioChunk {
    pub payload: Vec<u8>,
    pub mime_type: String,
}

impl AudioChunk {
    pub fn new(payload: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
