//! Patch URL modeling and filename derivation.
//!
//! Normalizes captured PR URLs into fetchable `.patch` resource URLs and
//! derives deterministic, filesystem-safe names for the saved artifact.

mod normalize;
mod sanitize;

pub use normalize::{ensure_patch_suffix, normalize_patch_url, pr_number_from_url, strip_query};
pub use sanitize::sanitize_branch_label;

/// Generic placeholder name that never wins over a derived filename.
pub const GENERIC_FILENAME: &str = "patch.patch";

/// PR identifier used when the URL carries no `/pull/<digits>` segment.
const FALLBACK_PR_ID: &str = "unknown";

/// Branch label used when the page provides none.
const FALLBACK_BRANCH: &str = "patch";

/// Derives the filename for a downloaded patch.
///
/// An explicit name that is non-empty and not the generic placeholder wins
/// unchanged. Otherwise the name is `<id>-<branch>.patch`, where `<id>` is
/// the numeric `/pull/<digits>` segment of `resource_url` (or `unknown`)
/// and `<branch>` is the sanitized branch label (or `patch` when absent or
/// empty after trimming). Labels that sanitize identically collide; this
/// is accepted.
pub fn derive_filename(
    resource_url: &str,
    explicit_name: Option<&str>,
    branch_label: Option<&str>,
) -> String {
    if let Some(name) = explicit_name {
        if !name.is_empty() && name != GENERIC_FILENAME {
            return name.to_string();
        }
    }

    let pr = pr_number_from_url(resource_url).unwrap_or_else(|| FALLBACK_PR_ID.to_string());
    let branch = branch_label
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_BRANCH);

    format!("{}-{}.patch", pr, sanitize_branch_label(branch))
}
