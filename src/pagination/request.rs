//! Page URL construction

use super::types::Window;
use crate::error::Result;
use url::form_urlencoded::byte_serialize;
use url::Url;

/// Build `{base}/{endpoint}?startTime={start}&endTime={end}&page={page}`
///
/// One trailing `/` on the base and one leading `/` on the endpoint are
/// dropped before joining them with a single `/`. Window values are
/// form-urlencoded; the result is deterministic for the same inputs.
pub fn build_page_url(base_url: &str, endpoint_path: &str, window: &Window, page: u32) -> Result<Url> {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    let path = endpoint_path.strip_prefix('/').unwrap_or(endpoint_path);

    let raw = format!(
        "{base}/{path}?startTime={}&endTime={}&page={page}",
        encode(&window.start),
        encode(&window.end),
    );

    Ok(Url::parse(&raw)?)
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}
