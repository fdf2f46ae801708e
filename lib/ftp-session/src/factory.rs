/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use crate::config::FtpConfiguration;
use crate::error::SessionOpenError;
use crate::session::FtpSession;
use crate::transport::FtpTransport;

#[cfg(feature = "suppaftp")]
use crate::transport::SuppaftpTransport;

/// Creates [`FtpSession`] values from a shared configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FtpSessionFactory {
    configuration: FtpConfiguration,
}

impl FtpSessionFactory {
    pub fn new(configuration: FtpConfiguration) -> Self {
        FtpSessionFactory { configuration }
    }

    /// The configuration this factory was created with.
    pub fn configuration(&self) -> &FtpConfiguration {
        &self.configuration
    }

    /// Open a session with the factory configuration and the default
    /// transport.
    #[cfg(feature = "suppaftp")]
    pub fn open_session(&self) -> Result<FtpSession<SuppaftpTransport>, SessionOpenError> {
        FtpSession::connect(self.configuration.clone())
    }

    /// Open a session with the supplied configuration instead of the
    /// factory one.
    #[cfg(feature = "suppaftp")]
    pub fn open_session_with(
        &self,
        configuration: FtpConfiguration,
    ) -> Result<FtpSession<SuppaftpTransport>, SessionOpenError> {
        FtpSession::connect(configuration)
    }

    /// Open a session over an already connected and authenticated transport.
    ///
    /// Any type satisfying [`FtpTransport`] is acceptable here; there is no
    /// runtime shape check to fail.
    pub fn open_session_over<C: FtpTransport>(
        &self,
        configuration: FtpConfiguration,
        transport: C,
    ) -> Result<FtpSession<C>, SessionOpenError> {
        FtpSession::with_transport(configuration, transport)
    }
}
