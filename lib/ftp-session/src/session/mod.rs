/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use crate::config::FtpConfiguration;
use crate::error::{SessionError, SessionOpenError};
use crate::response::FtpResponse;
use crate::transport::{FtpTransport, TransportError};

mod stream;
pub use stream::FtpStreamResponse;

const DEFAULT_ROOT: &str = "/";

/// Outcome of a single transport exchange.
enum FtpCall {
    /// The server accepted the request.
    Accepted,
    /// The server refused with a clean negative reply.
    Refused,
    /// The control connection is gone; the session has been closed.
    ConnectionLost(TransportError),
    /// Any other transport failure; the session stays usable.
    Failed(TransportError),
}

/// A session established between a client and an FTP server.
///
/// A session owns exactly one transport connection for its whole life and
/// resets its remote position to [`root`](FtpSession::root) before every
/// operation. Operations on a closed session fail with
/// [`SessionError::Closed`] without touching the transport. Once closed,
/// either explicitly or because the connection was lost mid-operation, a
/// session never reopens.
pub struct FtpSession<C: FtpTransport> {
    configuration: FtpConfiguration,
    transport: C,
    root: String,
    open: bool,
}

#[cfg(feature = "suppaftp")]
impl FtpSession<crate::transport::SuppaftpTransport> {
    /// Connect and authenticate a new session with the default transport.
    pub fn connect(configuration: FtpConfiguration) -> Result<Self, SessionOpenError> {
        let mut transport = crate::transport::SuppaftpTransport::new();
        transport
            .connect(&configuration.server, configuration.port)
            .map_err(|source| SessionOpenError::ConnectFailed {
                server: configuration.server.clone(),
                port: configuration.port,
                source,
            })?;
        transport
            .login(&configuration.username, &configuration.password)
            .map_err(|source| SessionOpenError::LoginFailed {
                username: configuration.username.clone(),
                source,
            })?;
        transport
            .enter_passive_mode()
            .map_err(SessionOpenError::NegotiationFailed)?;
        transport
            .set_binary_mode()
            .map_err(SessionOpenError::NegotiationFailed)?;
        Self::with_transport(configuration, transport)
    }
}

impl<C: FtpTransport> FtpSession<C> {
    /// Build a session over an already connected and authenticated transport.
    ///
    /// When the configuration carries a preferred directory the session moves
    /// there and uses it as root; otherwise the protocol default root is used
    /// and written back into the configuration.
    pub fn with_transport(
        mut configuration: FtpConfiguration,
        mut transport: C,
    ) -> Result<Self, SessionOpenError> {
        let root = match configuration.directory.clone() {
            Some(dir) => match transport.change_working_directory(&dir) {
                Ok(true) => dir,
                Ok(false) => {
                    return Err(SessionOpenError::RootUnavailable {
                        path: dir,
                        code: transport.reply_code(),
                        message: transport.reply_string().to_string(),
                    });
                }
                Err(e) => return Err(SessionOpenError::NegotiationFailed(e)),
            },
            None => {
                let root = DEFAULT_ROOT.to_string();
                configuration.directory = Some(root.clone());
                root
            }
        };
        debug!("session open with root {root}");
        Ok(FtpSession {
            configuration,
            transport,
            root,
            open: true,
        })
    }

    /// Whether this session can still be used.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The configuration this session was created with.
    pub fn configuration(&self) -> &FtpConfiguration {
        &self.configuration
    }

    /// The directory every operation starts from.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Request `file` as a byte stream.
    ///
    /// The returned response keeps the session borrowed until it is released:
    /// closing it runs the transfer completion handshake with the server, and
    /// no other operation can start before that.
    pub fn download(&mut self, file: &str) -> Result<FtpStreamResponse<'_, C>, SessionError> {
        self.ensure_open()?;
        debug!("downloading {file}");
        if let Some(response) = self.reset_position()? {
            return Ok(FtpStreamResponse::failed(self, response));
        }
        match self.transport.retrieve_file_stream(file) {
            Ok(Some(stream)) => {
                let response = self.success_response()?;
                Ok(FtpStreamResponse::started(self, response, stream))
            }
            Ok(None) => {
                debug!("unable to open remote file {file}");
                let response = self.refused_response()?;
                Ok(FtpStreamResponse::failed(self, response))
            }
            Err(e) if e.is_connection_closed() => {
                self.mark_lost();
                let response = self.failure_response(e)?;
                Ok(FtpStreamResponse::failed(self, response))
            }
            Err(e) => {
                let response = self.failure_response(e)?;
                Ok(FtpStreamResponse::failed(self, response))
            }
        }
    }

    /// Upload a local file into the session root.
    pub fn upload(&mut self, file: &Path) -> Result<FtpResponse, SessionError> {
        let target = self.root.clone();
        self.upload_to(file, &target)
    }

    /// Upload a local file into `target`, creating missing directories.
    ///
    /// The remote destination is `target` joined with the file's base name.
    /// The local file is opened and released by this method; a file that
    /// cannot be opened is reported as a local error with no reply code.
    pub fn upload_to(&mut self, file: &Path, target: &str) -> Result<FtpResponse, SessionError> {
        self.ensure_open()?;
        let Some(name) = file.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            return Ok(FtpResponse::local_error(format!(
                "invalid local file name {}",
                file.display()
            )));
        };
        debug!("uploading {} to {target}", file.display());
        if let Some(response) = self.reset_position()? {
            return Ok(response);
        }
        let mut source = match File::open(file) {
            Ok(f) => f,
            Err(e) => {
                debug!("unable to open local file {}: {e}", file.display());
                return Ok(FtpResponse::local_error(format!(
                    "unable to find local file {}",
                    file.display()
                )));
            }
        };
        self.store(&name, &mut source, target)
    }

    /// Upload a caller-owned stream as `name` into the session root.
    pub fn upload_stream<R: Read>(
        &mut self,
        name: &str,
        source: &mut R,
    ) -> Result<FtpResponse, SessionError> {
        let target = self.root.clone();
        self.upload_stream_to(name, source, &target)
    }

    /// Upload a caller-owned stream as `name` into `target`, creating
    /// missing directories. The caller keeps ownership of the stream.
    pub fn upload_stream_to<R: Read>(
        &mut self,
        name: &str,
        source: &mut R,
        target: &str,
    ) -> Result<FtpResponse, SessionError> {
        self.ensure_open()?;
        debug!("uploading stream as {name} to {target}");
        if let Some(response) = self.reset_position()? {
            return Ok(response);
        }
        let name = base_name(name).to_string();
        self.store(&name, source, target)
    }

    /// Delete a remote file.
    pub fn delete(&mut self, file: &str) -> Result<FtpResponse, SessionError> {
        self.ensure_open()?;
        debug!("deleting {file}");
        if let Some(response) = self.reset_position()? {
            return Ok(response);
        }
        let outcome = self.call(|t| t.delete_file(file));
        self.finish_simple(outcome, "unable to remove the file from the server")
    }

    /// Send a free-form SITE command. No validation is performed locally;
    /// a rejection surfaces as a classified error response.
    pub fn execute(&mut self, command: &str) -> Result<FtpResponse, SessionError> {
        self.ensure_open()?;
        debug!("executing site command {command}");
        if let Some(response) = self.reset_position()? {
            return Ok(response);
        }
        let outcome = self.call(|t| t.send_site_command(command));
        self.finish_simple(outcome, "unable to execute the command on the server")
    }

    /// Log out and disconnect. Closing an already closed session does
    /// nothing; a teardown failure is fatal since the transport state is
    /// indeterminate afterwards.
    pub fn close(&mut self) -> Result<(), SessionError> {
        if !self.open {
            return Ok(());
        }
        debug!("closing session");
        self.open = false;
        self.transport
            .logout()
            .map_err(SessionError::TeardownFailed)?;
        self.transport
            .disconnect()
            .map_err(SessionError::TeardownFailed)?;
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.open {
            Ok(())
        } else {
            Err(SessionError::Closed)
        }
    }

    fn call(&mut self, f: impl FnOnce(&mut C) -> Result<bool, TransportError>) -> FtpCall {
        match f(&mut self.transport) {
            Ok(true) => FtpCall::Accepted,
            Ok(false) => FtpCall::Refused,
            Err(e) if e.is_connection_closed() => {
                self.mark_lost();
                FtpCall::ConnectionLost(e)
            }
            Err(e) => FtpCall::Failed(e),
        }
    }

    fn mark_lost(&mut self) {
        self.open = false;
        if let Err(e) = self.transport.disconnect() {
            warn!("disconnect after connection loss failed: {e}");
        }
    }

    /// Move back to the session root before an operation.
    fn reset_position(&mut self) -> Result<Option<FtpResponse>, SessionError> {
        let root = self.root.clone();
        match self.call(|t| t.change_working_directory(&root)) {
            FtpCall::Accepted => Ok(None),
            FtpCall::Refused => {
                debug!("unable to enter session root {root}");
                self.refused_response().map(Some)
            }
            FtpCall::ConnectionLost(e) | FtpCall::Failed(e) => self.failure_response(e).map(Some),
        }
    }

    fn store(
        &mut self,
        name: &str,
        source: &mut dyn Read,
        target: &str,
    ) -> Result<FtpResponse, SessionError> {
        if let Some(response) = self.create_directory_tree(target)? {
            return Ok(response);
        }
        let outcome = self.call(|t| t.store_file(name, source));
        self.finish_simple(outcome, "unable to store the file on the server")
    }

    /// Walk `target` from the root, entering each segment and creating the
    /// ones that do not exist. Leaves the transport positioned at the full
    /// target path on success.
    fn create_directory_tree(&mut self, target: &str) -> Result<Option<FtpResponse>, SessionError> {
        let relative = relative_to_root(&self.root, target);
        for segment in relative.split('/') {
            if segment.is_empty() || segment == "." {
                continue;
            }
            match self.call(|t| t.change_working_directory(segment)) {
                FtpCall::Accepted => continue,
                FtpCall::Refused => {}
                FtpCall::ConnectionLost(e) | FtpCall::Failed(e) => {
                    return self.failure_response(e).map(Some);
                }
            }
            match self.call(|t| t.make_directory(segment)) {
                FtpCall::Accepted => {}
                FtpCall::Refused => {
                    return Ok(Some(FtpResponse::error(
                        self.transport.reply_code(),
                        format!(
                            "unable to create directory {segment}: {}",
                            self.transport.reply_string()
                        ),
                    )?));
                }
                FtpCall::ConnectionLost(e) | FtpCall::Failed(e) => {
                    return self.failure_response(e).map(Some);
                }
            }
            match self.call(|t| t.change_working_directory(segment)) {
                FtpCall::Accepted => {}
                FtpCall::Refused => {
                    return Ok(Some(FtpResponse::error(
                        self.transport.reply_code(),
                        format!(
                            "unable to enter created directory {segment}: {}",
                            self.transport.reply_string()
                        ),
                    )?));
                }
                FtpCall::ConnectionLost(e) | FtpCall::Failed(e) => {
                    return self.failure_response(e).map(Some);
                }
            }
        }
        Ok(None)
    }

    fn finish_simple(
        &mut self,
        outcome: FtpCall,
        context: &str,
    ) -> Result<FtpResponse, SessionError> {
        match outcome {
            FtpCall::Accepted => self.success_response(),
            FtpCall::Refused => {
                debug!(
                    "{context}: ({}) {}",
                    self.transport.reply_code(),
                    self.transport.reply_string()
                );
                self.refused_response()
            }
            FtpCall::ConnectionLost(e) | FtpCall::Failed(e) => self.failure_response(e),
        }
    }

    fn success_response(&self) -> Result<FtpResponse, SessionError> {
        Ok(FtpResponse::success(
            self.transport.reply_code(),
            self.transport.reply_string(),
        )?)
    }

    fn refused_response(&self) -> Result<FtpResponse, SessionError> {
        Ok(FtpResponse::error(
            self.transport.reply_code(),
            self.transport.reply_string(),
        )?)
    }

    fn failure_response(&self, error: TransportError) -> Result<FtpResponse, SessionError> {
        Ok(FtpResponse::error_caused(
            self.transport.reply_code(),
            self.transport.reply_string(),
            error,
        )?)
    }
}

/// Strip the session root from `target`; other absolute targets are walked
/// as if they were root-relative.
fn relative_to_root<'a>(root: &str, target: &'a str) -> &'a str {
    if target == root {
        return "";
    }
    if let Some(rest) = target.strip_prefix(root) {
        if root.ends_with('/') {
            return rest;
        }
        if let Some(rest) = rest.strip_prefix('/') {
            return rest;
        }
    }
    target.trim_start_matches('/')
}

fn base_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_to_root_cases() {
        assert_eq!(relative_to_root("/", "/"), "");
        assert_eq!(relative_to_root("/", "/a/b"), "a/b");
        assert_eq!(relative_to_root("/", "a/b"), "a/b");
        assert_eq!(relative_to_root("/share", "/share"), "");
        assert_eq!(relative_to_root("/share", "/share/a/b"), "a/b");
        assert_eq!(relative_to_root("/share", "a/b"), "a/b");
        assert_eq!(relative_to_root("/share", "/other/a"), "other/a");
        assert_eq!(relative_to_root("/share", "/shareholder"), "shareholder");
    }

    #[test]
    fn base_name_cases() {
        assert_eq!(base_name("file.txt"), "file.txt");
        assert_eq!(base_name("a/b/file.txt"), "file.txt");
        assert_eq!(base_name("/file.txt"), "file.txt");
    }
}
