/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

//! Session-oriented layer over an FTP control/data connection.
//!
//! A [`FtpSession`] owns one transport connection, resets its remote
//! position to a fixed root before every operation and reports each outcome
//! as an inspectable [`FtpResponse`] carrying the classified server reply.
//! The wire protocol itself is delegated to an [`FtpTransport`]
//! implementation; a blocking default over `suppaftp` is provided behind the
//! `suppaftp` feature (enabled by default).
//!
//! Streaming downloads return a [`FtpStreamResponse`] that keeps the session
//! borrowed until the caller releases the stream, which triggers the
//! server-side transfer completion handshake.

mod config;
mod factory;
mod reply;
mod session;

pub mod error;
pub mod response;
pub mod transport;

pub use config::FtpConfiguration;
pub use factory::FtpSessionFactory;
pub use reply::{FtpReplyCode, ReplyCodeError, ReplyStatus};
pub use response::FtpResponse;
pub use session::{FtpSession, FtpStreamResponse};
pub use transport::{FtpTransport, TransportError};
