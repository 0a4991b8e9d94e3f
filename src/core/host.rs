use proxy_wasm::hostcalls;
use proxy_wasm::types::MapType;

use crate::core::http::error::SendError;

/// The host calls a filter needs to answer a request on its own.
///
/// `ProxyWasmHost` goes through the proxy-wasm ABI. The trait exists so the
/// HTTP context can be driven without a proxy.
pub trait RequestHost {
    /// The request headers in the order the host reports them.
    fn request_headers(&self) -> Vec<(String, String)>;

    /// Sends a final response with no extra headers.
    fn send_response(&self, status_code: u32, body: &[u8]) -> Result<(), SendError>;
}

#[derive(Default, Clone, Copy, Debug)]
pub struct ProxyWasmHost;

impl RequestHost for ProxyWasmHost {
    fn request_headers(&self) -> Vec<(String, String)> {
        // A missing header map hashes like an empty one.
        hostcalls::get_map(MapType::HttpRequestHeaders).unwrap_or_default()
    }

    fn send_response(&self, status_code: u32, body: &[u8]) -> Result<(), SendError> {
        // HttpContext::send_http_response panics on a host error; the raw call reports it.
        hostcalls::send_http_response(status_code, Vec::new(), Some(body))
            .map_err(|status| SendError::new(status_code, status))
    }
}
