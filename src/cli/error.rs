// Input validation utilities for consistent error messages

/// Validate a column name before it is looked up in the assessments header
pub fn validate_column_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Column name cannot be empty".to_string());
    }
    if name.chars().any(|c| c.is_control()) {
        return Err(format!("Invalid column name: '{}'", name.escape_default()));
    }
    Ok(())
}
