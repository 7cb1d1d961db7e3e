use serde::{Deserialize, Serialize};

/// Хранилище доменных событий. Документы архива УПД только читаются,
/// поэтому событий пока нет.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventStore {
    _placeholder: (),
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }
}
