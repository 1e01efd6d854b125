//! 客户端层错误类型定义

use robomaster_driver::DriverError;
use std::time::Duration;
use thiserror::Error;

/// 客户端层错误类型
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("No robot broadcast received within {0:?}")]
    DiscoveryTimeout(Duration),

    #[error("{module} connection not established")]
    ConnectionTimeout { module: &'static str },

    #[error("Client not started")]
    NotStarted,

    #[error("Client already started")]
    AlreadyStarted,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        ClientError::InvalidArgument(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_display() {
        let err = ClientError::ConnectionTimeout { module: "Robot" };
        assert_eq!(err.to_string(), "Robot connection not established");

        let err: ClientError = DriverError::NotStarted.into();
        assert!(matches!(err, ClientError::Driver(DriverError::NotStarted)));

        let err = ClientError::DiscoveryTimeout(Duration::from_secs(30));
        assert!(err.to_string().contains("30s"));
    }
}
