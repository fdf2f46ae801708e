/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use crate::reply::{FtpReplyCode, ReplyCodeError};
use crate::response::{GenericResponse, Status};
use crate::transport::TransportError;

/// The outcome of one FTP session operation.
///
/// Carries the classified reply code of the last server exchange and, when a
/// transport failure was involved, the failure itself. A clean negative reply
/// produces an error response with no transport error attached; a failure
/// that never reached the server (such as a missing local upload source)
/// produces an error response with no reply code.
#[derive(Debug, Default)]
pub struct FtpResponse {
    response: GenericResponse,
    reply_code: Option<FtpReplyCode>,
    error: Option<TransportError>,
}

impl FtpResponse {
    /// A success response for the given raw reply.
    ///
    /// Fails if `code` is not part of the supported reply code set.
    pub fn success<S: Into<String>>(code: u16, message: S) -> Result<Self, ReplyCodeError> {
        Ok(FtpResponse {
            response: GenericResponse::success_with(message),
            reply_code: Some(FtpReplyCode::from_code(code)?),
            error: None,
        })
    }

    /// An error response for a clean negative reply.
    pub fn error<S: Into<String>>(code: u16, message: S) -> Result<Self, ReplyCodeError> {
        Ok(FtpResponse {
            response: GenericResponse::error_with(message),
            reply_code: Some(FtpReplyCode::from_code(code)?),
            error: None,
        })
    }

    /// An error response for a transport failure observed at reply `code`.
    pub fn error_caused<S: Into<String>>(
        code: u16,
        message: S,
        error: TransportError,
    ) -> Result<Self, ReplyCodeError> {
        Ok(FtpResponse {
            response: GenericResponse::error_with(message),
            reply_code: Some(FtpReplyCode::from_code(code)?),
            error: Some(error),
        })
    }

    /// An error response for a failure raised before the server was
    /// contacted. No reply code is attached.
    pub fn local_error<S: Into<String>>(message: S) -> Self {
        FtpResponse {
            response: GenericResponse::error_with(message),
            reply_code: None,
            error: None,
        }
    }

    pub fn status(&self) -> Status {
        self.response.status()
    }

    pub fn message(&self) -> Option<&str> {
        self.response.message()
    }

    pub fn reply_code(&self) -> Option<FtpReplyCode> {
        self.reply_code
    }

    pub fn transport_error(&self) -> Option<&TransportError> {
        self.error.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.response.is_success()
    }

    pub fn is_error(&self) -> bool {
        self.response.is_error()
    }
}

impl PartialEq for FtpResponse {
    fn eq(&self, other: &Self) -> bool {
        // io errors carry no structural equality; compare the rendered form
        let errors_match = match (&self.error, &other.error) {
            (None, None) => true,
            (Some(a), Some(b)) => a.to_string() == b.to_string(),
            _ => false,
        };
        self.response == other.response && self.reply_code == other.reply_code && errors_match
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::reply::ReplyStatus;

    #[test]
    fn default_is_unknown() {
        let response = FtpResponse::default();
        assert_eq!(response.status(), Status::Unknown);
        assert_eq!(response.reply_code(), None);
        assert!(response.transport_error().is_none());
    }

    #[test]
    fn success_classifies_reply() {
        let response = FtpResponse::success(226, "closing data connection").unwrap();
        assert!(response.is_success());
        assert_eq!(
            response.reply_code(),
            Some(FtpReplyCode::ClosingDataConnection)
        );
        assert_eq!(
            response.reply_code().unwrap().status(),
            ReplyStatus::PositiveCompletion
        );
        assert_eq!(response.message(), Some("closing data connection"));
    }

    #[test]
    fn error_keeps_clean_negative_reply() {
        let response = FtpResponse::error(550, "file unavailable").unwrap();
        assert!(response.is_error());
        assert_eq!(response.reply_code(), Some(FtpReplyCode::FileUnavailable));
        assert!(response.transport_error().is_none());
    }

    #[test]
    fn error_caused_attaches_transport_error() {
        let cause = TransportError::ConnectionClosed(io::Error::new(
            io::ErrorKind::ConnectionReset,
            "reset",
        ));
        let response = FtpResponse::error_caused(421, "service not available", cause).unwrap();
        assert!(response.is_error());
        assert_eq!(
            response.reply_code(),
            Some(FtpReplyCode::ServiceNotAvailable)
        );
        assert!(
            response
                .transport_error()
                .is_some_and(|e| e.is_connection_closed())
        );
    }

    #[test]
    fn unknown_code_fails_construction() {
        assert_eq!(
            FtpResponse::success(299, "?").unwrap_err(),
            ReplyCodeError::UnsupportedCode(299)
        );
        assert_eq!(
            FtpResponse::error(42, "?").unwrap_err(),
            ReplyCodeError::InvalidCode(42)
        );
    }

    #[test]
    fn local_error_has_no_reply_code() {
        let response = FtpResponse::local_error("unable to find local file a.txt");
        assert!(response.is_error());
        assert_eq!(response.reply_code(), None);
        assert!(response.transport_error().is_none());
    }

    #[test]
    fn equality_is_structural() {
        let a = FtpResponse::success(250, "ok").unwrap();
        let b = FtpResponse::success(250, "ok").unwrap();
        assert_eq!(a, b);

        let c = FtpResponse::error(550, "no").unwrap();
        assert_ne!(a, c);

        let io_err = || io::Error::new(io::ErrorKind::ConnectionReset, "reset");
        let d =
            FtpResponse::error_caused(421, "gone", TransportError::ConnectionClosed(io_err()))
                .unwrap();
        let e =
            FtpResponse::error_caused(421, "gone", TransportError::ConnectionClosed(io_err()))
                .unwrap();
        assert_eq!(d, e);
        assert_ne!(d, FtpResponse::error(421, "gone").unwrap());
    }
}
