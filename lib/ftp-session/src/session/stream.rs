/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;

use log::{debug, warn};

use crate::error::SessionError;
use crate::reply::FtpReplyCode;
use crate::response::{FtpResponse, Status};
use crate::session::FtpSession;
use crate::transport::{FtpTransport, TransportError};

/// The response to a streaming retrieval.
///
/// A successful download hands the data stream to the caller together with a
/// deferred completion step: the server only finishes the transaction once
/// the stream has been released and the end reply consumed. This type keeps
/// the owning session mutably borrowed, so the completion step cannot be
/// skipped by starting another operation, and its `Drop` runs the same
/// release path on early exits.
pub struct FtpStreamResponse<'a, C: FtpTransport> {
    session: &'a mut FtpSession<C>,
    response: FtpResponse,
    stream: Option<C::DataStream>,
    finished: bool,
}

impl<'a, C: FtpTransport> FtpStreamResponse<'a, C> {
    pub(super) fn started(
        session: &'a mut FtpSession<C>,
        response: FtpResponse,
        stream: C::DataStream,
    ) -> Self {
        FtpStreamResponse {
            session,
            response,
            stream: Some(stream),
            finished: false,
        }
    }

    /// A download that never opened a data stream; there is nothing to
    /// complete with the server.
    pub(super) fn failed(session: &'a mut FtpSession<C>, response: FtpResponse) -> Self {
        FtpStreamResponse {
            session,
            response,
            stream: None,
            finished: true,
        }
    }

    pub fn response(&self) -> &FtpResponse {
        &self.response
    }

    pub fn status(&self) -> Status {
        self.response.status()
    }

    pub fn message(&self) -> Option<&str> {
        self.response.message()
    }

    pub fn reply_code(&self) -> Option<FtpReplyCode> {
        self.response.reply_code()
    }

    pub fn transport_error(&self) -> Option<&TransportError> {
        self.response.transport_error()
    }

    /// The retrieved byte stream, present only when the download succeeded.
    ///
    /// Callers reading through this accessor must release the response with
    /// [`close`](FtpStreamResponse::close) when done; [`consume`] does both.
    ///
    /// [`consume`]: FtpStreamResponse::consume
    pub fn stream(&mut self) -> Option<&mut C::DataStream> {
        self.stream.as_mut()
    }

    /// Read the stream with `f`, then release it and complete the transfer
    /// whether or not `f` succeeded.
    ///
    /// Fails with [`SessionError::StreamMissing`] when no stream was ever
    /// set, e.g. when consuming an error response.
    pub fn consume<T>(
        mut self,
        f: impl FnOnce(&mut C::DataStream) -> io::Result<T>,
    ) -> Result<T, SessionError> {
        let Some(stream) = self.stream.as_mut() else {
            return Err(SessionError::StreamMissing);
        };
        let outcome = f(stream);
        let released = self.finish();
        match (outcome, released) {
            (Ok(value), Ok(())) => Ok(value),
            (_, Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(SessionError::ConsumerFailed(e)),
        }
    }

    /// Release the stream and run the completion handshake with the server.
    pub fn close(mut self) -> Result<(), SessionError> {
        self.finish()
    }

    fn finish(&mut self) -> Result<(), SessionError> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        // the data connection must be released before the end reply is read
        drop(self.stream.take());
        match self.session.transport.complete_pending_command() {
            Ok(done) => {
                if !done {
                    debug!("server reported the transfer as not completed");
                }
                Ok(())
            }
            Err(e) => Err(SessionError::CompletionFailed(e)),
        }
    }
}

impl<C: FtpTransport> Drop for FtpStreamResponse<'_, C> {
    fn drop(&mut self) {
        if let Err(e) = self.finish() {
            warn!("download completion failed on drop: {e}");
        }
    }
}
