/// Failed API call as shown to the user.
///
/// `status` is the HTTP status of the response, or 500 when the request could not be sent
/// or its body could not be read.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u64, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
