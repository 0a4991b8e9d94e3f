
use proxy_wasm::traits::*;
use proxy_wasm::types::*;

/// Root context shared by every HTTP context of the plugin.
///
/// Holds the current plugin configuration and hands a copy of it to each
/// new HTTP context.
pub struct HttpRootContext<T: Clone> {
    pub policy_config: T,
    pub serialize: fn(&[u8]) -> T,
    pub create_http_context: fn(T) -> Box<dyn HttpContext>,
}

impl<T: Clone> HttpRootContext<T> {
    pub fn new(
        policy_config : T,
        serialize : fn(&[u8]) -> T,
        create_http_context : fn(T) -> Box<dyn HttpContext>
    ) -> Self {
        HttpRootContext {
            policy_config,
            serialize,
            create_http_context,
        }
    }

    /// Replaces the stored configuration with the deserialized plugin configuration.
    pub fn configure(&mut self, config_bytes: Option<Bytes>) {
        if let Some(config_bytes) = config_bytes {
            self.policy_config = (self.serialize)(config_bytes.as_slice());
        }
    }
}

impl<T: Clone> Context for HttpRootContext<T> {}

impl<T: Clone> RootContext for HttpRootContext<T> {

    fn create_http_context(&self, _: u32) -> Option<Box<dyn HttpContext>> {
        Some((self.create_http_context)(self.policy_config.clone()))
    }

    fn get_type(&self) -> Option<ContextType> {
        Some(ContextType::HttpContext)
    }

    fn on_configure(&mut self, _: usize) -> bool {
        let config_bytes = self.get_plugin_configuration();
        self.configure(config_bytes);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::PolicyConfig;

    struct Noop;

    impl Context for Noop {}

    impl HttpContext for Noop {}

    fn noop(_: PolicyConfig) -> Box<dyn HttpContext> {
        Box::new(Noop)
    }

    fn root() -> HttpRootContext<PolicyConfig> {
        HttpRootContext::new(PolicyConfig::default(), PolicyConfig::from_slice, noop)
    }

    #[test]
    fn keeps_default_without_plugin_configuration() {
        let mut root = root();
        root.configure(None);
        assert!(root.policy_config.log_level.is_none());
    }

    #[test]
    fn applies_plugin_configuration() {
        let mut root = root();
        root.configure(Some(br#"{"log-level": "WARN"}"#.to_vec()));
        assert_eq!(root.policy_config.log_level(), LogLevel::Warn);
    }

    #[test]
    fn reports_http_context_type() {
        assert_eq!(root().get_type(), Some(ContextType::HttpContext));
    }
}
