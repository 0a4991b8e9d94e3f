use std::fmt;

use proxy_wasm::types::Status;

#[doc = "The host refused to send a local response."]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SendError {
    pub status_code: u32,
    pub host_status: Status,
}

impl SendError {
    pub fn new(status_code: u32, host_status: Status) -> Self {
        Self {
            status_code,
            host_status,
        }
    }
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sending {} response failed: {:?}", self.status_code, self.host_status)
    }
}

impl std::error::Error for SendError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_status_and_host_error() {
        let error = SendError::new(500, Status::InternalFailure);
        assert_eq!(error.to_string(), "sending 500 response failed: InternalFailure");
    }
}
