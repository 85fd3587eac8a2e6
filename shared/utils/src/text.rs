//! Text normalization helpers.

/// Title-cases `text`: the first letter of every run of letters is upper-cased
/// and the rest of the run lower-cased. Any non-letter, digits included, ends
/// a run, so `"12eme"` becomes `"12Eme"` and `"d'arc"` becomes `"D'Arc"`.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}

/// Trims `value` and maps blank strings to `None`.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
