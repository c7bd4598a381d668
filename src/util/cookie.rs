//! Reading cookies out of the browser cookie store.
//!
//! The backend URL-encodes the CSRF cookie value, so the browser read
//! decodes it before the value is echoed back in a header. Parsing of the
//! `document.cookie` string is pure and testable off-browser.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Find a cookie value by name in a `document.cookie`-formatted string.
///
/// Returns the raw (still encoded) value of the first cookie with a
/// matching name.
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| match pair.split_once('=') {
            Some((key, value)) if key == name => Some(value),
            _ => None,
        })
}

/// Read a cookie from the browser and URI-decode its value.
///
/// Returns `None` outside a browser environment or when the cookie is not
/// set.
pub fn read_cookie(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()?;
        let cookies = document.cookie().ok()?;
        let raw = find_cookie(&cookies, name)?;
        js_sys::decode_uri_component(raw).ok().map(String::from)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}
