#[doc = "The coin flip HTTP context."]
pub mod coin_flip;
#[doc = "The header hash and the branch it selects."]
pub mod hash;
