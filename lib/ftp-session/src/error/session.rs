/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;

use thiserror::Error;

use crate::reply::ReplyCodeError;
use crate::transport::TransportError;

/// Failure of a session operation that indicates caller error or leaves
/// resources in an indeterminate state.
///
/// Remote negative replies are not errors at this level: they are recovered
/// into [`FtpResponse`](crate::FtpResponse) values so callers can branch on
/// the outcome.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session was already closed when the operation was invoked.
    #[error("session is closed")]
    Closed,
    /// The server returned a reply code outside the supported set.
    #[error(transparent)]
    UnknownReplyCode(#[from] ReplyCodeError),
    /// The response never carried a stream.
    #[error("no stream present in this response")]
    StreamMissing,
    /// The consumer passed to a managed stream read failed.
    #[error("stream consumer failed: {0:?}")]
    ConsumerFailed(#[source] io::Error),
    /// The post-download completion handshake failed.
    #[error("transfer completion failed: {0}")]
    CompletionFailed(#[source] TransportError),
    /// Logout or disconnect failed while closing the session.
    #[error("session teardown failed: {0}")]
    TeardownFailed(#[source] TransportError),
}
