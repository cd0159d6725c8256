//! Refresh token cookie handling

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{HttpMessage, HttpRequest};

use cine_shared::config::CookieConfig;

/// Header accepted in place of the cookie by the refresh endpoint
pub const REFRESH_TOKEN_HEADER: &str = "refresh-token";

/// Build the HttpOnly cookie carrying a refresh token
pub fn refresh_cookie(config: &CookieConfig, token: &str) -> Cookie<'static> {
    Cookie::build(config.name.clone(), token.to_string())
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Lax)
        .path(config.path.clone())
        .max_age(Duration::seconds(config.max_age))
        .finish()
}

/// Build a cookie that makes the browser drop the refresh token
pub fn removal_cookie(config: &CookieConfig) -> Cookie<'static> {
    let mut cookie = refresh_cookie(config, "");
    cookie.make_removal();
    cookie
}

/// Refresh token from the cookie, empty values treated as absent
pub fn token_from_cookie(req: &HttpRequest, config: &CookieConfig) -> Option<String> {
    req.cookie(&config.name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// Refresh token from the cookie, falling back to the `refresh-token` header
pub fn token_from_cookie_or_header(req: &HttpRequest, config: &CookieConfig) -> Option<String> {
    token_from_cookie(req, config).or_else(|| {
        req.headers()
            .get(REFRESH_TOKEN_HEADER)?
            .to_str()
            .ok()
            .filter(|value| !value.is_empty())
            .map(|value| value.to_string())
    })
}
