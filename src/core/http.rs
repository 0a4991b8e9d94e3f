#[doc = "Errors raised while answering a request."]
pub mod error;
