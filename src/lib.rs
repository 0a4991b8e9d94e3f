#[doc = "Plugin configuration."]
pub mod config;
#[doc = "Base functionality shared by Proxy-Wasm filters: root context, host access, logging and errors."]
pub mod core;
#[doc = "The coin flip filter."]
pub mod filter;

use crate::core::root::HttpRootContext;

use proxy_wasm::traits::*;
use proxy_wasm::types::*;

use crate::config::PolicyConfig;
use crate::filter::coin_flip::CoinFlipContext;

pub const POLICY_ID: &str = "coin-flip-filter";

proxy_wasm::main! {{
    // Per-context loggers filter by the configured level.
    proxy_wasm::set_log_level(LogLevel::Trace);
    proxy_wasm::set_root_context(create_root_context);
}}

fn create_root_context(_: u32) -> Box<dyn RootContext> {
    Box::new(HttpRootContext::<PolicyConfig>::new(
        PolicyConfig::default(),
        PolicyConfig::from_slice,
        create_http_context
    ))
}

fn create_http_context(policy_config : PolicyConfig) -> Box<dyn HttpContext> {
    Box::new(CoinFlipContext::new(policy_config))
}
