//! URL classifiers for the OAuth callbacks and the internal filesystem.

use regex::Regex;
use std::sync::OnceLock;

/// `<scheme>:code=<CODE>,state=<STATE>,intent=social_auth`, covering the whole URL.
fn social_auth_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        // Any RFC 3986 scheme name, not a fixed-width prefix: `jagex:` and `xscheme:` both match.
        Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:code=([^,]+),state=([^,]+),intent=social_auth$").ok()
    })
    .as_ref()
}

/// `http://localhost/#code=...`, covering the whole URL.
fn game_auth_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^http://localhost/#(code=.+)$").ok())
        .as_ref()
}

/// Social-auth callback captures, taken verbatim from the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SocialAuthCallback<'a> {
    pub(crate) code: &'a str,
    pub(crate) state: &'a str,
}

pub(crate) fn match_social_auth(url: &str) -> Option<SocialAuthCallback<'_>> {
    let captures = social_auth_regex()?.captures(url)?;
    let code = captures.get(1)?.as_str();
    let state = captures.get(2)?.as_str();
    Some(SocialAuthCallback { code, state })
}

/// Returns the fragment (starting at `code=`) of a localhost game-auth callback.
pub(crate) fn match_game_auth(url: &str) -> Option<&str> {
    let captures = game_auth_regex()?.captures(url)?;
    Some(captures.get(1)?.as_str())
}

/// Strips any `?`/`#` suffix and then the internal base; returns the remaining
/// path when the URL lives under the base.
pub(crate) fn internal_path<'a>(url: &'a str, base: &str) -> Option<&'a str> {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    url[..end].strip_prefix(base)
}

#[cfg(test)]
mod tests {
    use super::SocialAuthCallback;
    use super::internal_path;
    use super::match_game_auth;
    use super::match_social_auth;

    #[test]
    fn social_auth_captures_code_and_state() {
        assert_eq!(
            match_social_auth("jagex:code=ABC123,state=xyz,intent=social_auth"),
            Some(SocialAuthCallback {
                code: "ABC123",
                state: "xyz"
            })
        );
        assert_eq!(
            match_social_auth("xscheme:code=a%20b,state=s_1,intent=social_auth"),
            Some(SocialAuthCallback {
                code: "a%20b",
                state: "s_1"
            })
        );
    }

    #[test]
    fn social_auth_requires_whole_url() {
        assert!(match_social_auth("jagex:code=A,state=B,intent=social_auth&x").is_none());
        assert!(match_social_auth("xjagex:code=A,state=B,intent=social_authz").is_none());
        assert!(match_social_auth(" jagex:code=A,state=B,intent=social_auth").is_none());
        assert!(match_social_auth("jagex:code=,state=B,intent=social_auth").is_none());
        assert!(match_social_auth("jagex:code=A,B,state=C,intent=social_auth").is_none());
        assert!(match_social_auth("jagex:state=B,code=A,intent=social_auth").is_none());
    }

    #[test]
    fn game_auth_captures_fragment() {
        assert_eq!(
            match_game_auth("http://localhost/#code=ABC&extra=1"),
            Some("code=ABC&extra=1")
        );
        assert!(match_game_auth("http://localhost/#code=").is_none());
        assert!(match_game_auth("https://localhost/#code=ABC").is_none());
        assert!(match_game_auth("http://localhost/?code=ABC").is_none());
        assert!(match_game_auth("http://localhost:8080/#code=ABC").is_none());
    }

    #[test]
    fn internal_path_strips_query_and_fragment() {
        let base = "boltapp://app/";
        assert_eq!(internal_path("boltapp://app/oauth.html", base), Some("oauth.html"));
        assert_eq!(
            internal_path("boltapp://app/oauth.html?code=1#top", base),
            Some("oauth.html")
        );
        assert_eq!(internal_path("boltapp://app/", base), Some(""));
        assert_eq!(internal_path("boltapp://app/#frag", base), Some(""));
        assert_eq!(internal_path("boltapp://app", base), None);
        assert_eq!(internal_path("boltapp://ap?p/", base), None);
        assert_eq!(internal_path("https://example.com/", base), None);
    }
}
