#[doc = "The host seam: header access and local responses."]
pub mod host;
#[doc = "HTTP helpers shared by the filters."]
pub mod http;
#[doc = "Prefixed, level-filtered logging."]
pub mod logger;
#[doc = "The root context handed to the host."]
pub mod root;
