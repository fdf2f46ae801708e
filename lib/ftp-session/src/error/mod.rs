/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

mod connect;
pub use connect::SessionOpenError;

mod session;
pub use session::SessionError;
