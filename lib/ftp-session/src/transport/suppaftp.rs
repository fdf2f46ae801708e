/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io::{self, Read};

use log::debug;
use suppaftp::types::{FileType, Response};
use suppaftp::{FtpError, FtpResult, FtpStream, Mode, Status};

use super::{FtpTransport, TransportError};

/// Blocking default transport over [`suppaftp::FtpStream`].
///
/// Refusals are surfaced as clean negative outcomes carrying the server's
/// real reply. Where the wire crate consumes a success reply internally
/// (transfer start and completion, quit), the canonical code for that phase
/// is recorded instead.
#[derive(Default)]
pub struct SuppaftpTransport {
    stream: Option<FtpStream>,
    last_code: u16,
    last_message: String,
}

impl SuppaftpTransport {
    pub fn new() -> Self {
        SuppaftpTransport::default()
    }

    /// Wrap an already connected and authenticated stream.
    pub fn from_stream(stream: FtpStream) -> Self {
        SuppaftpTransport {
            stream: Some(stream),
            last_code: 0,
            last_message: String::new(),
        }
    }

    fn stream(&mut self) -> Result<&mut FtpStream, TransportError> {
        self.stream.as_mut().ok_or_else(|| {
            TransportError::Io(io::Error::new(
                io::ErrorKind::NotConnected,
                "transport is not connected",
            ))
        })
    }

    fn record(&mut self, code: u16, message: &str) {
        self.last_code = code;
        self.last_message = message.to_string();
    }

    fn record_reply(&mut self, response: &Response) {
        self.last_code = response.status.code() as u16;
        self.last_message = String::from_utf8_lossy(&response.body)
            .trim_end()
            .to_string();
    }

    fn lost(&mut self, error: io::Error) -> TransportError {
        self.record(421, "service not available, closing control connection");
        TransportError::ConnectionClosed(error)
    }

    /// Error mapping for construction-phase calls, where a refusal is fatal.
    fn fail(&mut self, error: FtpError) -> TransportError {
        match error {
            FtpError::ConnectionError(e) => self.lost(e),
            FtpError::UnexpectedResponse(response) => {
                self.record_reply(&response);
                TransportError::Rejected {
                    code: self.last_code,
                    message: self.last_message.clone(),
                }
            }
            other => TransportError::InvalidResponse(other.to_string()),
        }
    }

    fn finish_bool(&mut self, result: FtpResult<Response>) -> Result<bool, TransportError> {
        match result {
            Ok(response) => {
                self.record_reply(&response);
                Ok(true)
            }
            Err(FtpError::UnexpectedResponse(response)) => {
                self.record_reply(&response);
                Ok(false)
            }
            Err(FtpError::ConnectionError(e)) => Err(self.lost(e)),
            Err(other) => Err(TransportError::InvalidResponse(other.to_string())),
        }
    }

    fn finish_unit(
        &mut self,
        result: FtpResult<()>,
        code: u16,
        message: &str,
    ) -> Result<bool, TransportError> {
        match result {
            Ok(()) => {
                self.record(code, message);
                Ok(true)
            }
            Err(FtpError::UnexpectedResponse(response)) => {
                self.record_reply(&response);
                Ok(false)
            }
            Err(FtpError::ConnectionError(e)) => Err(self.lost(e)),
            Err(other) => Err(TransportError::InvalidResponse(other.to_string())),
        }
    }
}

impl FtpTransport for SuppaftpTransport {
    type DataStream = Box<dyn Read + Send>;

    fn connect(&mut self, server: &str, port: u16) -> Result<(), TransportError> {
        debug!("connecting to {server}:{port}");
        let stream = FtpStream::connect((server, port)).map_err(|e| self.fail(e))?;
        match stream.get_welcome_msg() {
            Some(welcome) => {
                let welcome = welcome.trim_end().to_string();
                self.record(220, &welcome);
            }
            None => self.record(220, "service ready for new user"),
        }
        self.stream = Some(stream);
        Ok(())
    }

    fn login(&mut self, username: &str, password: &str) -> Result<(), TransportError> {
        debug!("logging in as {username}");
        let result = self.stream()?.login(username, password);
        result.map_err(|e| self.fail(e))?;
        self.record(230, "user logged in");
        Ok(())
    }

    fn enter_passive_mode(&mut self) -> Result<(), TransportError> {
        self.stream()?.set_mode(Mode::Passive);
        Ok(())
    }

    fn set_binary_mode(&mut self) -> Result<(), TransportError> {
        let result = self.stream()?.transfer_type(FileType::Binary);
        result.map_err(|e| self.fail(e))?;
        self.record(200, "type set to I");
        Ok(())
    }

    fn change_working_directory(&mut self, path: &str) -> Result<bool, TransportError> {
        debug!("changing working directory to {path}");
        let result = self
            .stream()?
            .custom_command(format!("CWD {path}"), &[Status::RequestedFileActionOk]);
        self.finish_bool(result)
    }

    fn make_directory(&mut self, path: &str) -> Result<bool, TransportError> {
        debug!("creating directory {path}");
        let result = self
            .stream()?
            .custom_command(format!("MKD {path}"), &[Status::PathCreated]);
        self.finish_bool(result)
    }

    fn retrieve_file_stream(
        &mut self,
        path: &str,
    ) -> Result<Option<Self::DataStream>, TransportError> {
        debug!("retrieving {path}");
        match self.stream()?.retr_as_stream(path) {
            Ok(stream) => {
                self.record(150, "file status okay, about to open data connection");
                Ok(Some(Box::new(stream)))
            }
            Err(FtpError::UnexpectedResponse(response)) => {
                self.record_reply(&response);
                Ok(None)
            }
            Err(FtpError::ConnectionError(e)) => Err(self.lost(e)),
            Err(other) => Err(TransportError::InvalidResponse(other.to_string())),
        }
    }

    fn store_file(&mut self, path: &str, mut source: &mut dyn Read) -> Result<bool, TransportError> {
        debug!("storing {path}");
        match self.stream()?.put_file(path, &mut source) {
            Ok(bytes) => {
                debug!("stored {bytes} bytes at {path}");
                self.record(226, "closing data connection");
                Ok(true)
            }
            Err(FtpError::UnexpectedResponse(response)) => {
                self.record_reply(&response);
                Ok(false)
            }
            Err(FtpError::ConnectionError(e)) => Err(self.lost(e)),
            Err(other) => Err(TransportError::InvalidResponse(other.to_string())),
        }
    }

    fn delete_file(&mut self, path: &str) -> Result<bool, TransportError> {
        debug!("deleting {path}");
        let result = self
            .stream()?
            .custom_command(format!("DELE {path}"), &[Status::RequestedFileActionOk]);
        self.finish_bool(result)
    }

    fn send_site_command(&mut self, command: &str) -> Result<bool, TransportError> {
        debug!("sending site command {command}");
        let result = self.stream()?.site(command);
        self.finish_bool(result)
    }

    fn complete_pending_command(&mut self) -> Result<bool, TransportError> {
        // the data stream was already dropped by the caller
        let result = self.stream()?.finalize_retr_stream(io::empty());
        self.finish_unit(result, 226, "closing data connection")
    }

    fn logout(&mut self) -> Result<bool, TransportError> {
        debug!("logging out");
        let result = self.stream()?.quit();
        self.finish_unit(result, 221, "service closing control connection")
    }

    fn disconnect(&mut self) -> Result<(), TransportError> {
        // dropping the stream closes the control socket
        self.stream = None;
        Ok(())
    }

    fn reply_code(&self) -> u16 {
        self.last_code
    }

    fn reply_string(&self) -> &str {
        &self.last_message
    }
}
