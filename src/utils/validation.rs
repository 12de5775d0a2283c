use validator::Validate;

pub fn validate<T: Validate>(val: &T) -> Result<(), validator::ValidationErrors> {
    val.validate()
}

/// Trims free text from a form field; `None` when nothing is left.
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Telegram handles are typed with or without the leading `@`; anything
/// outside the Telegram charset is rejected.
pub fn normalize_username(raw: &str) -> Option<String> {
    non_blank(raw.trim().trim_start_matches('@'))
        .filter(|name| name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
}
