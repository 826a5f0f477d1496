//! Login form rendering.

use super::utils::escape_html;
use axum::response::Html;

/// Display context for the login form. The password field is always empty;
/// submitted passwords are never echoed back.
#[derive(Debug, Default)]
pub(super) struct LoginPage<'a> {
    pub(super) username: &'a str,
    pub(super) return_url: Option<&'a str>,
    pub(super) error: Option<&'a str>,
}

pub(super) fn render(page: &LoginPage<'_>) -> Html<String> {
    let error = page.error.map_or_else(String::new, |message| {
        format!("<p class=\"error\">{}</p>\n", escape_html(message))
    });

    let return_url = page.return_url.map_or_else(String::new, |url| {
        format!(
            "<input type=\"hidden\" name=\"return_url\" value=\"{}\">\n",
            escape_html(url)
        )
    });

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Sign in - Timesheet Portal</title></head>
<body>
<h1>Sign in</h1>
{error}<form method="post" action="/login">
{return_url}<label>Username <input type="text" name="username" value="{username}"></label>
<label>Password <input type="password" name="password" value=""></label>
<label><input type="checkbox" name="remember_me" value="on"> Remember me</label>
<button type="submit">Sign in</button>
</form>
</body>
</html>
"#,
        username = escape_html(page.username),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefilled_username_is_rendered() {
        let Html(body) = render(&LoginPage {
            username: "pc1",
            ..LoginPage::default()
        });
        assert!(body.contains("name=\"username\" value=\"pc1\""));
        assert!(!body.contains("class=\"error\""));
        assert!(!body.contains("name=\"return_url\""));
    }

    #[test]
    fn error_and_return_url_are_escaped() {
        let Html(body) = render(&LoginPage {
            username: "<script>",
            return_url: Some("/claims?month=3&year=2025"),
            error: Some("Invalid username or password."),
        });
        assert!(body.contains("Invalid username or password."));
        assert!(body.contains("&lt;script&gt;"));
        assert!(body.contains("value=\"/claims?month=3&amp;year=2025\""));
    }

    #[test]
    fn password_field_is_always_empty() {
        let Html(body) = render(&LoginPage {
            username: "alice",
            ..LoginPage::default()
        });
        assert!(body.contains("name=\"password\" value=\"\""));
    }
}
