use std::time::Duration;

pub const SESSION_COOKIE: &str = "token";

/// `Set-Cookie` value carrying a freshly issued session token.
pub fn session_cookie(token: &str, max_age: Duration, secure: bool) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        max_age.as_secs()
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that removes the session cookie. The attributes must
/// match those used at set time or browsers keep the cookie.
pub fn clear_session_cookie(secure: bool) -> String {
    let mut cookie = format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Pulls the session token out of a `Cookie` request header
/// (semicolon-separated `name=value` pairs).
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix("token="))
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_format() {
        let cookie = session_cookie("abc.def.ghi", Duration::from_secs(3600), false);
        assert_eq!(
            cookie,
            "token=abc.def.ghi; HttpOnly; SameSite=Lax; Path=/; Max-Age=3600"
        );
    }

    #[test]
    fn session_cookie_secure_in_production() {
        let cookie = session_cookie("t", Duration::from_secs(3600), true);
        assert!(cookie.ends_with("; Secure"));
    }

    #[test]
    fn clear_cookie_matches_set_attributes() {
        assert_eq!(
            clear_session_cookie(false),
            "token=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0"
        );
        assert_eq!(
            clear_session_cookie(true),
            "token=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0; Secure"
        );
    }

    #[test]
    fn parses_token_among_other_pairs() {
        let header = "theme=dark; token=abc123;  lang=en";
        assert_eq!(token_from_cookie_header(header), Some("abc123"));
    }

    #[test]
    fn missing_or_empty_token_is_none() {
        assert_eq!(token_from_cookie_header("theme=dark; lang=en"), None);
        assert_eq!(token_from_cookie_header("token="), None);
        assert_eq!(token_from_cookie_header(""), None);
    }
}
