use serde::{Deserialize, Serialize};

use crate::annotation::{self, AnnotationError, Token};

/// A citation of text from a source, possibly referencing lemmata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub id: i64,
    /// Annotated text, see [`crate::annotation`].
    pub context_value: String,
    pub created: String,
    pub source_id: i64,
}

impl Context {
    /// Decodes `context_value` into render tokens.
    pub fn tokens(&self) -> Result<Vec<Token>, AnnotationError> {
        annotation::decode(&self.context_value)
    }
}
