use proxy_wasm::traits::*;
use proxy_wasm::types::*;

use crate::config::PolicyConfig;
use crate::core::host::{ProxyWasmHost, RequestHost};
use crate::core::logger::Logger;
use crate::filter::hash::Coin;
use crate::POLICY_ID;

/// Answers every request itself with a 200 or a 500, picked from a hash of
/// the request headers.
pub struct CoinFlipContext<H: RequestHost = ProxyWasmHost> {
    host: H,
    logger: Logger,
}

impl CoinFlipContext {
    pub fn new(policy_config: PolicyConfig) -> Self {
        CoinFlipContext::with_host(ProxyWasmHost, policy_config)
    }
}

impl<H: RequestHost> CoinFlipContext<H> {
    pub fn with_host(host: H, policy_config: PolicyConfig) -> Self {
        let logger = Logger::new(POLICY_ID.to_string(), policy_config.log_level());
        CoinFlipContext { host, logger }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Flips the coin and sends the matching response.
    ///
    /// Returns `Pause` once the response is sent. When the host fails to
    /// send it the request is let through with `Continue`.
    pub fn flip(&mut self) -> Action {
        let headers = self.host.request_headers();
        self.logger.log_debug(&format!("Hashing {} request headers.", headers.len()));

        let coin = Coin::flip(&headers);
        self.logger.log_info(&coin.describe());

        if let Err(send_error) = self.host.send_response(coin.status(), coin.body()) {
            self.logger.log_error(&format!("Failed to send response: {}", send_error));
            return Action::Continue;
        }

        Action::Pause
    }
}

impl<H: RequestHost> Context for CoinFlipContext<H> {}

impl<H: RequestHost> HttpContext for CoinFlipContext<H> {
    fn on_http_request_headers(&mut self, _num_headers: usize, _end_of_stream: bool) -> Action {
        self.flip()
    }
}
