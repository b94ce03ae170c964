const MAX_VISIBLE_CHARS: usize = 80;

/// Shortens text for log fields and masks credentials that leak into it.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let preview = if total > MAX_VISIBLE_CHARS {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total)
    } else {
        trimmed.to_string()
    };

    redact_credentials(&preview)
}

fn redact_credentials(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("key=", "key=[REDACTED]"),
        ("access_token=", "access_token=[REDACTED]"),
        ("ya29.", "[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(pattern) {
            let idx = search_from + found;
            let end = result[idx + pattern.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| idx + pattern.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
            search_from = idx + replacement.len();
        }
    }

    result
}
