/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use serde::{Deserialize, Serialize};

/// Connection coordinates for an FTP session.
///
/// Remote directories are `/` separated strings as they travel on the wire.
/// When `directory` is not set, the session fills it in with the server
/// default root at open time; after that the configuration is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FtpConfiguration {
    pub server: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Preferred root directory for sessions opened with this configuration.
    pub directory: Option<String>,
}

impl FtpConfiguration {
    pub fn new<S1, S2, S3>(server: S1, port: u16, username: S2, password: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        FtpConfiguration {
            server: server.into(),
            port,
            username: username.into(),
            password: password.into(),
            directory: None,
        }
    }

    pub fn with_directory<S: Into<String>>(mut self, directory: S) -> Self {
        self.directory = Some(directory.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        let a = FtpConfiguration::new("ftp.example.net", 21, "user", "secret");
        let b = FtpConfiguration::new("ftp.example.net", 21, "user", "secret");
        assert_eq!(a, b);

        let c = b.clone().with_directory("/share");
        assert_ne!(a, c);
        assert_eq!(c.directory.as_deref(), Some("/share"));
    }

    #[test]
    fn serde_round_trip() {
        let config = FtpConfiguration::new("ftp.example.net", 2121, "user", "secret")
            .with_directory("/share/incoming");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: FtpConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
