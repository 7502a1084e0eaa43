use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use domain::theme::{Theme, THEME_COOKIE};
use std::convert::Infallible;

/// The theme stored in the request's `theme` cookie, or the default when the cookie is
/// missing or holds something unrecognized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ThemePreference(pub(crate) Theme);

impl<S> FromRequestParts<S> for ThemePreference
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let stored = jar.get(THEME_COOKIE).map(|cookie| cookie.value_trimmed());

        Ok(ThemePreference(Theme::from_stored(stored)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::COOKIE, Request};

    async fn extract(cookies: &[&str]) -> Theme {
        let mut builder = Request::builder().uri("/api/theme");
        for cookie in cookies {
            builder = builder.header(COOKIE, *cookie);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        let ThemePreference(theme) = ThemePreference::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        theme
    }

    #[tokio::test]
    async fn test_missing_cookie_defaults_to_light() {
        assert_eq!(extract(&[]).await, Theme::Light);
        assert_eq!(extract(&["lang=ar"]).await, Theme::Light);
    }

    #[tokio::test]
    async fn test_reads_theme_among_other_cookies() {
        assert_eq!(extract(&["lang=ar; theme=dark; sid=abc"]).await, Theme::Dark);
        assert_eq!(extract(&["lang=ar", "theme=dark"]).await, Theme::Dark);
    }

    #[tokio::test]
    async fn test_quoted_value_is_read() {
        assert_eq!(extract(&[r#"theme="dark""#]).await, Theme::Dark);
    }

    #[tokio::test]
    async fn test_malformed_pairs_are_skipped() {
        assert_eq!(extract(&["garbage; =orphan; theme=dark"]).await, Theme::Dark);
    }

    #[tokio::test]
    async fn test_unknown_value_defaults_to_light() {
        assert_eq!(extract(&["theme=sepia"]).await, Theme::Light);
    }
}
