/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

use crate::transport::TransportError;

/// Failure while establishing a session.
///
/// All variants are fatal: no partial session is ever handed out.
#[derive(Debug, Error)]
pub enum SessionOpenError {
    #[error("connect to {server}:{port} failed: {source}")]
    ConnectFailed {
        server: String,
        port: u16,
        #[source]
        source: TransportError,
    },
    #[error("login failed for user {username}: {source}")]
    LoginFailed {
        username: String,
        #[source]
        source: TransportError,
    },
    #[error("connection negotiation failed: {0}")]
    NegotiationFailed(#[source] TransportError),
    /// The preferred root directory could not be entered.
    #[error("root directory {path} is not available ({code} {message})")]
    RootUnavailable {
        path: String,
        code: u16,
        message: String,
    },
}
