use serde::{Deserialize, Serialize};

/// Body of a 422 response: `{"errors": {"body": [...]}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: ValidationErrors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub body: Vec<String>,
}

impl ValidationErrorResponse {
    pub fn new(body: Vec<String>) -> Self {
        Self {
            errors: ValidationErrors { body },
        }
    }
}
