use thiserror::Error;

/// Rejections raised while turning operator input into a sweep request.
///
/// None of these can happen once a sweep is running.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid subnet '{0}': expected three dot-separated octets, e.g. 192.168.1")]
    InvalidSubnet(String),

    #[error("invalid octet '{octet}' in subnet '{subnet}': must be between 0 and 255")]
    InvalidOctet { subnet: String, octet: String },

    #[error("invalid host range {start}-{end}: expected 0 <= start < end <= 254")]
    InvalidRange { start: u32, end: u32 },

    #[error("invalid worker count {0}: at least one worker is required")]
    InvalidWorkers(usize),

    #[error("invalid timeout '{0}': must be a positive number of seconds")]
    InvalidTimeout(String),

    #[error("invalid input '{0}': please enter an integer value")]
    InvalidInteger(String),
}
