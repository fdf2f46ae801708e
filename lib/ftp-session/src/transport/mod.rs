/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io::{self, Read};

use thiserror::Error;

#[cfg(feature = "suppaftp")]
mod suppaftp;
#[cfg(feature = "suppaftp")]
pub use suppaftp::SuppaftpTransport;

#[derive(Debug, Error)]
pub enum TransportError {
    /// The control connection was closed by the remote side. Low level socket
    /// errors on an already dead connection are reported the same way.
    #[error("connection closed by server: {0:?}")]
    ConnectionClosed(#[source] io::Error),
    /// A construction-phase request was refused by the server.
    #[error("request rejected by server ({code} {message})")]
    Rejected { code: u16, message: String },
    /// The server reply could not be interpreted.
    #[error("invalid server response: {0}")]
    InvalidResponse(String),
    #[error("io failed: {0:?}")]
    Io(#[from] io::Error),
}

impl TransportError {
    /// Whether this failure is the distinguished connection-loss signal that
    /// must close the owning session.
    pub fn is_connection_closed(&self) -> bool {
        matches!(self, TransportError::ConnectionClosed(_))
    }
}

/// The wire-level FTP client capability a session delegates to.
///
/// Boolean verbs report a clean negative reply as `Ok(false)`; only transport
/// level failures use the error channel. After every call the last reply
/// observed on the control connection is available through [`reply_code`] and
/// [`reply_string`]. Implementations record `421` as the last reply when they
/// observe a connection loss, so responses built afterwards classify as
/// transient.
///
/// [`reply_code`]: FtpTransport::reply_code
/// [`reply_string`]: FtpTransport::reply_string
pub trait FtpTransport {
    type DataStream: Read;

    fn connect(&mut self, server: &str, port: u16) -> Result<(), TransportError>;
    fn login(&mut self, username: &str, password: &str) -> Result<(), TransportError>;
    fn enter_passive_mode(&mut self) -> Result<(), TransportError>;
    fn set_binary_mode(&mut self) -> Result<(), TransportError>;

    fn change_working_directory(&mut self, path: &str) -> Result<bool, TransportError>;
    fn make_directory(&mut self, path: &str) -> Result<bool, TransportError>;
    /// Start a streaming retrieval. `None` means the remote file could not be
    /// opened (a clean negative reply). After the returned stream is released
    /// the transfer must be finished with
    /// [`complete_pending_command`](FtpTransport::complete_pending_command).
    fn retrieve_file_stream(
        &mut self,
        path: &str,
    ) -> Result<Option<Self::DataStream>, TransportError>;
    fn store_file(&mut self, path: &str, source: &mut dyn Read) -> Result<bool, TransportError>;
    fn delete_file(&mut self, path: &str) -> Result<bool, TransportError>;
    fn send_site_command(&mut self, command: &str) -> Result<bool, TransportError>;
    fn complete_pending_command(&mut self) -> Result<bool, TransportError>;

    fn logout(&mut self) -> Result<bool, TransportError>;
    fn disconnect(&mut self) -> Result<(), TransportError>;

    fn reply_code(&self) -> u16;
    fn reply_string(&self) -> &str;
}
