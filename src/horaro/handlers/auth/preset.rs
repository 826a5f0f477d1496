//! Role-based UI presets for the login form.

/// Map a login-page role hint to a UI preset token.
///
/// The table is fixed: coordinator shares the `pc1` preset and manager the
/// `am1` preset. Unknown hints produce no preset, which leaves the username
/// field empty.
#[must_use]
pub fn role_preset(hint: &str) -> &'static str {
    match hint.trim().to_lowercase().as_str() {
        "lecturer" => "lecturer",
        "pc1" | "coordinator" => "pc1",
        "am1" | "manager" => "am1",
        _ => "",
    }
}
