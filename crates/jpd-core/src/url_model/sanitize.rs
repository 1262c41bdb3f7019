//! Branch label sanitization for filenames.

/// Replaces every character outside `[A-Za-z0-9_-]` with `_`.
///
/// No collapsing or trimming: distinct labels may sanitize identically
/// (accepted collision).
pub fn sanitize_branch_label(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_specials() {
        assert_eq!(sanitize_branch_label("feature/x!"), "feature_x_");
    }

    #[test]
    fn keeps_allowed_chars() {
        assert_eq!(sanitize_branch_label("fix_bug-123"), "fix_bug-123");
    }

    #[test]
    fn non_ascii_replaced() {
        assert_eq!(sanitize_branch_label("büg"), "b_g");
    }
}
