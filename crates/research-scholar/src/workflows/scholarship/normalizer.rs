/// Lowercased, trimmed form used for every case-insensitive comparison in the pipeline.
pub(crate) fn normalize_text(value: &str) -> String {
    value.trim().to_lowercase()
}

pub(crate) fn eq_ignore_case(left: &str, right: &str) -> bool {
    normalize_text(left) == normalize_text(right)
}

pub(crate) fn is_any_sentinel(value: &str) -> bool {
    eq_ignore_case(value, "any")
}
