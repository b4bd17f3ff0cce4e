use serde::{Deserialize, Serialize};

/// A joke as served by the API. Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    #[serde(alias = "joke")]
    pub setup: String,
    #[serde(alias = "response")]
    pub punchline: String,
}

impl Joke {
    pub fn new(setup: impl Into<String>, punchline: impl Into<String>) -> Self {
        Self {
            setup: setup.into(),
            punchline: punchline.into(),
        }
    }
}
