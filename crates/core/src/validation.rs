//! Input validation shared by the repository and API layers.

use serde_json::Value;

use crate::error::CoreError;

/// Maximum length of a project name, in characters.
pub const MAX_PROJECT_NAME_LEN: usize = 200;

/// Validate a project name: non-blank and at most [`MAX_PROJECT_NAME_LEN`] chars.
pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be empty".to_string()));
    }
    let len = name.chars().count();
    if len > MAX_PROJECT_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "name must be at most {MAX_PROJECT_NAME_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate that document content is a JSON object.
pub fn validate_document_content(content: &Value) -> Result<(), CoreError> {
    if !content.is_object() {
        return Err(CoreError::Validation(
            "content must be a JSON object".to_string(),
        ));
    }
    Ok(())
}

/// Validate that a template id is present.
pub fn validate_template_id(template_id: &str) -> Result<(), CoreError> {
    if template_id.trim().is_empty() {
        return Err(CoreError::Validation(
            "templateId must not be empty".to_string(),
        ));
    }
    Ok(())
}
