//! Cookie-based cart session middleware for storefront pages.

use axum::{
    extract::{Request, State},
    http::{
        HeaderValue,
        header::{COOKIE, SET_COOKIE},
    },
    middleware::Next,
    response::Response,
};
use base64::Engine as _;

use crate::state::AppState;

/// Name of the cookie holding the cart key.
pub const CART_COOKIE: &str = "cart_id";

/// Length of random bytes before base64 encoding.
const CART_KEY_BYTES: usize = 16;

/// Encoded length of a cart key (16 bytes as unpadded base64).
const CART_KEY_LEN: usize = 22;

/// The shopper's cart key, resolved by [`layer`] and stored in request
/// extensions.
///
/// Handlers receive it with `Extension(CartKey(key))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartKey(pub String);

/// Resolves the cart key for every storefront request.
///
/// # Cookie Format
///
/// ```text
/// Cookie: cart_id=<22 url-safe base64 characters>
/// ```
///
/// # Flow
///
/// 1. Extract `cart_id` from the `Cookie` header
/// 2. Keep it if well-formed, otherwise generate a fresh key
/// 3. Insert [`CartKey`] into request extensions and run the handler
/// 4. For a fresh key, append `Set-Cookie` to the response
///
/// The key is opaque: an unknown but well-formed key is simply an empty cart.
pub async fn layer(State(st): State<AppState>, mut req: Request, next: Next) -> Response {
    let existing = req
        .headers()
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(cart_key_from_cookies)
        .filter(|key| is_valid_cart_key(key));

    let (key, fresh) = match existing {
        Some(key) => (key, false),
        None => (generate_cart_key(), true),
    };

    req.extensions_mut().insert(CartKey(key.clone()));

    let mut response = next.run(req).await;

    if fresh {
        match HeaderValue::from_str(&session_cookie(&key, st.cookie_secure)) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::error!("Failed to build cart cookie: {}", e),
        }
    }

    response
}

/// Finds the `cart_id` value among the cookies of a `Cookie` header.
fn cart_key_from_cookies(cookie_str: &str) -> Option<String> {
    cookie_str.split(';').find_map(|cookie| {
        let mut parts = cookie.trim().splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(CART_COOKIE), Some(value)) => Some(value.to_string()),
            _ => None,
        }
    })
}

/// Generates a random cart key.
///
/// # Panics
///
/// Panics if the system random number generator fails.
pub fn generate_cart_key() -> String {
    let mut buffer = [0u8; CART_KEY_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Returns whether `key` has the shape of a generated cart key.
pub fn is_valid_cart_key(key: &str) -> bool {
    key.len() == CART_KEY_LEN
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn session_cookie(key: &str, secure: bool) -> String {
    let mut cookie = format!("{CART_COOKIE}={key}; Path=/; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
