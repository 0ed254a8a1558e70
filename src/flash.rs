//! One-shot confirmation notices ("Project created!" and friends).
//!
//! A write route attaches the notice to its redirect response as a
//! short-lived cookie; the next rendered page consumes it and sends a
//! clearing cookie back. The notice never outlives that one read.

use axum::{
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Redirect, Response},
};

const COOKIE_NAME: &str = "notice";
const COOKIE_TTL_SECS: u32 = 60;

/// Redirect to `to` carrying `message` for the next rendered page.
pub fn redirect_with_notice(to: &str, message: &str) -> Response {
    let mut response = Redirect::to(to).into_response();
    let cookie = format!(
        "{COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={COOKIE_TTL_SECS}",
        encode(message)
    );
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

/// Read the pending notice from the request headers, if any.
pub fn take(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').map(str::trim).find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == COOKIE_NAME && !value.is_empty()).then(|| decode(value))
    })
}

/// Attach the clearing cookie to a page that consumed a notice.
pub fn cleared(mut response: Response) -> Response {
    let cookie = format!("{COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

// Cookie-safe percent encoding. Messages are short ASCII phrases, but the
// cookie grammar forbids spaces, commas and semicolons in values.
fn encode(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    for byte in message.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~' | b'!') {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 3 <= bytes.len()
            && let Some(hex) = value.get(i + 1..i + 3)
            && let Ok(byte) = u8::from_str_radix(hex, 16)
        {
            out.push(byte);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
