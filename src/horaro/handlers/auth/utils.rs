//! Small helpers for redirect guarding and form parsing.

/// Open-redirect guard: a return URL is only honored when it points inside
/// this application. Local means it starts with a single `/`; `//host` and
/// `/\host` forms are protocol-relative and rejected.
pub(super) fn is_local_url(url: &str) -> bool {
    let mut chars = url.chars();
    if chars.next() != Some('/') {
        return false;
    }
    !matches!(chars.next(), Some('/' | '\\'))
}

/// Pick the post-login redirect target. Non-local or blank return URLs fall
/// back to the default landing path without surfacing an error.
pub(super) fn resolve_return_url<'a>(
    return_url: Option<&'a str>,
    default_landing: &'a str,
) -> &'a str {
    match return_url.map(str::trim) {
        Some(url) if !url.is_empty() && is_local_url(url) => url,
        _ => default_landing,
    }
}

/// HTML checkboxes post "on" when ticked and nothing at all otherwise.
pub(super) fn checkbox_checked(value: Option<&str>) -> bool {
    value.is_some_and(|v| matches!(v.trim().to_lowercase().as_str(), "on" | "true" | "1"))
}

/// Escape a value for interpolation into the login page markup.
pub(super) fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_urls_accepted() {
        assert!(is_local_url("/timesheets"));
        assert!(is_local_url("/"));
        assert!(is_local_url("/claims?month=3"));
    }

    #[test]
    fn absolute_and_protocol_relative_urls_rejected() {
        assert!(!is_local_url("https://evil.example.com"));
        assert!(!is_local_url("http://evil.example.com/timesheets"));
        assert!(!is_local_url("//evil.example.com"));
        assert!(!is_local_url("/\\evil.example.com"));
        assert!(!is_local_url(""));
        assert!(!is_local_url("timesheets"));
    }

    #[test]
    fn resolve_falls_back_to_landing() {
        assert_eq!(
            resolve_return_url(Some("https://evil.example.com"), "/dashboard"),
            "/dashboard"
        );
        assert_eq!(resolve_return_url(Some("  "), "/dashboard"), "/dashboard");
        assert_eq!(resolve_return_url(None, "/dashboard"), "/dashboard");
        assert_eq!(
            resolve_return_url(Some("/timesheets"), "/dashboard"),
            "/timesheets"
        );
    }

    #[test]
    fn checkbox_values() {
        assert!(checkbox_checked(Some("on")));
        assert!(checkbox_checked(Some("true")));
        assert!(checkbox_checked(Some("1")));
        assert!(!checkbox_checked(Some("off")));
        assert!(!checkbox_checked(None));
    }

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>&"quote"'</b>"#),
            "&lt;b&gt;&amp;&quot;quote&quot;&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
