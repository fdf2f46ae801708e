/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

//! Outcome envelopes shared by the protocol session modules.
//!
//! Every response starts from the same `status` + `message` record and is
//! produced by one constructor per outcome, so no partially populated value
//! ever escapes. The whole family serializes to structured records and
//! round-trips through deserialization unchanged.

use serde::{Deserialize, Serialize};

mod ftp;
pub use ftp::FtpResponse;

const DEFAULT_ERROR_MESSAGE: &str = "error reported by the server";

/// Coarse outcome of a protocol request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not yet populated. Only a freshly constructed response is `Unknown`;
    /// an outcome constructor never produces it.
    #[default]
    Unknown,
    Success,
    Error,
}

impl Status {
    /// The default message declared for this status, if any.
    pub fn default_message(&self) -> Option<&'static str> {
        match self {
            Status::Error => Some(DEFAULT_ERROR_MESSAGE),
            _ => None,
        }
    }
}

/// A response carrying only the outcome and an optional message.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericResponse {
    status: Status,
    message: Option<String>,
}

impl GenericResponse {
    /// A success response with no message.
    pub fn success() -> Self {
        GenericResponse {
            status: Status::Success,
            message: None,
        }
    }

    /// A success response with the supplied message.
    pub fn success_with<S: Into<String>>(message: S) -> Self {
        GenericResponse {
            status: Status::Success,
            message: Some(message.into()),
        }
    }

    /// An error response with the default error message.
    pub fn error() -> Self {
        GenericResponse {
            status: Status::Error,
            message: Some(DEFAULT_ERROR_MESSAGE.to_string()),
        }
    }

    /// An error response with the supplied message.
    pub fn error_with<S: Into<String>>(message: S) -> Self {
        GenericResponse {
            status: Status::Error,
            message: Some(message.into()),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }
}

/// A response carrying a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleResponse<T> {
    #[serde(flatten)]
    response: GenericResponse,
    item: Option<T>,
}

impl<T> Default for SingleResponse<T> {
    fn default() -> Self {
        SingleResponse {
            response: GenericResponse::default(),
            item: None,
        }
    }
}

impl<T> SingleResponse<T> {
    /// A success response carrying `item`.
    pub fn success(item: T) -> Self {
        SingleResponse {
            response: GenericResponse::success(),
            item: Some(item),
        }
    }

    pub fn error() -> Self {
        SingleResponse {
            response: GenericResponse::error(),
            item: None,
        }
    }

    pub fn error_with<S: Into<String>>(message: S) -> Self {
        SingleResponse {
            response: GenericResponse::error_with(message),
            item: None,
        }
    }

    pub fn status(&self) -> Status {
        self.response.status()
    }

    pub fn message(&self) -> Option<&str> {
        self.response.message()
    }

    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn into_item(self) -> Option<T> {
        self.item
    }
}

/// A response carrying a list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(flatten)]
    response: GenericResponse,
    items: Vec<T>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        ListResponse {
            response: GenericResponse::default(),
            items: Vec::new(),
        }
    }
}

impl<T> ListResponse<T> {
    /// A success response carrying `items`.
    pub fn success(items: Vec<T>) -> Self {
        ListResponse {
            response: GenericResponse::success(),
            items,
        }
    }

    pub fn error() -> Self {
        ListResponse {
            response: GenericResponse::error(),
            items: Vec::new(),
        }
    }

    pub fn error_with<S: Into<String>>(message: S) -> Self {
        ListResponse {
            response: GenericResponse::error_with(message),
            items: Vec::new(),
        }
    }

    pub fn status(&self) -> Status {
        self.response.status()
    }

    pub fn message(&self) -> Option<&str> {
        self.response.message()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// A response carrying one page of a paginated result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(flatten)]
    response: GenericResponse,
    items: Vec<T>,
    total_count: usize,
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        PaginatedResponse {
            response: GenericResponse::default(),
            items: Vec::new(),
            total_count: 0,
        }
    }
}

impl<T> PaginatedResponse<T> {
    /// A success response carrying `items` out of `total_count` present on
    /// the server.
    pub fn success(items: Vec<T>, total_count: usize) -> Self {
        PaginatedResponse {
            response: GenericResponse::success(),
            items,
            total_count,
        }
    }

    pub fn error() -> Self {
        PaginatedResponse {
            response: GenericResponse::error(),
            items: Vec::new(),
            total_count: 0,
        }
    }

    pub fn error_with<S: Into<String>>(message: S) -> Self {
        PaginatedResponse {
            response: GenericResponse::error_with(message),
            items: Vec::new(),
            total_count: 0,
        }
    }

    pub fn status(&self) -> Status {
        self.response.status()
    }

    pub fn message(&self) -> Option<&str> {
        self.response.message()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }
}
