/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplyCodeError {
    /// The code lies outside every range defined by the protocol.
    #[error("invalid reply code {0}")]
    InvalidCode(u16),
    /// The code lies in a defined range but is not part of the supported set.
    #[error("unsupported reply code {0}")]
    UnsupportedCode(u16),
}

/// Coarse outcome classes for FTP reply codes, determined by numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyStatus {
    /// `[100,200)` - the action has started, a final reply will follow.
    PositivePreliminary,
    /// `[200,300)` - the action completed successfully.
    PositiveCompletion,
    /// `[300,400)` - the server expects further input before completing.
    PositiveIntermediate,
    /// `[400,500)` - temporary failure, the request may be retried later.
    NegativeTransient,
    /// `[500,600)` - permanent failure, the request must not be repeated as is.
    NegativePermanent,
    /// `[600,700)` - reply protected by a security mechanism.
    ProtectedReply,
}

impl ReplyStatus {
    /// Classify a numeric reply code into its outcome class.
    ///
    /// Fails if `code` is not one of the declared reply codes.
    pub fn classify(code: u16) -> Result<ReplyStatus, ReplyCodeError> {
        FtpReplyCode::from_code(code).map(|c| c.status())
    }
}

macro_rules! ftp_reply_codes {
    (
        $(
            $(#[$docs:meta])*
            ($konst:ident, $code:literal);
        )+
    ) => {
        /// A reply code defined by the FTP protocol and supported by this crate.
        ///
        /// The set is closed: numeric codes outside it are rejected by
        /// [`FtpReplyCode::from_code`] and [`ReplyStatus::classify`] instead of
        /// being mapped to a nearby class.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum FtpReplyCode {
            $(
                $(#[$docs])*
                $konst,
            )+
        }

        impl FtpReplyCode {
            /// The numeric value of this reply code.
            pub fn code(&self) -> u16 {
                match self {
                    $(FtpReplyCode::$konst => $code,)+
                }
            }

            /// Look up the reply code declared for `code`.
            pub fn from_code(code: u16) -> Result<Self, ReplyCodeError> {
                match code {
                    $($code => Ok(FtpReplyCode::$konst),)+
                    n if !(100..700).contains(&n) => Err(ReplyCodeError::InvalidCode(n)),
                    n => Err(ReplyCodeError::UnsupportedCode(n)),
                }
            }

            #[cfg(test)]
            pub(crate) const ALL: &'static [FtpReplyCode] = &[
                $(FtpReplyCode::$konst,)+
            ];
        }
    };
}

ftp_reply_codes! {
    /// 110 - restart marker reply
    (RestartMarker, 110);
    /// 120 - service ready in a few minutes
    (ServiceReadySoon, 120);
    /// 125 - data connection already open, transfer starting
    (DataConnectionAlreadyOpen, 125);
    /// 150 - file status okay, about to open data connection
    (FileStatusOk, 150);
    (CommandOk, 200);
    (CommandSuperfluous, 202);
    (SystemStatus, 211);
    (DirectoryStatus, 212);
    (FileStatus, 213);
    (HelpMessage, 214);
    (SystemType, 215);
    /// 220 - service ready for new user
    (ServiceReady, 220);
    /// 221 - service closing control connection
    (ServiceClosing, 221);
    (DataConnectionOpen, 225);
    /// 226 - closing data connection, requested action successful
    (ClosingDataConnection, 226);
    (EnteringPassiveMode, 227);
    (EnteringExtendedPassiveMode, 229);
    (UserLoggedIn, 230);
    /// 234 - security data exchange complete
    (SecurityDataExchangeComplete, 234);
    /// 235 - security data exchange completed successfully
    (SecurityDataExchangeSuccessful, 235);
    /// 250 - requested file action okay, completed
    (FileActionOk, 250);
    /// 257 - pathname created
    (PathCreated, 257);
    /// 331 - user name okay, need password
    (NeedPassword, 331);
    /// 332 - need account for login
    (NeedAccount, 332);
    /// 334 - requested security mechanism accepted
    (SecurityMechanismOk, 334);
    /// 335 - security data acceptable, more is required
    (SecurityDataAcceptable, 335);
    /// 350 - requested file action pending further information
    (FilePending, 350);
    /// 421 - service not available, closing control connection
    (ServiceNotAvailable, 421);
    /// 425 - can't open data connection
    (CannotOpenDataConnection, 425);
    /// 426 - connection closed, transfer aborted
    (TransferAborted, 426);
    /// 431 - need some unavailable resource to process security
    (UnavailableResource, 431);
    /// 450 - requested file action not taken, file unavailable
    (FileActionNotTaken, 450);
    /// 451 - requested action aborted, local error in processing
    (ActionAborted, 451);
    /// 452 - requested action not taken, insufficient storage space
    (InsufficientStorage, 452);
    /// 500 - syntax error, command unrecognized
    (UnrecognizedCommand, 500);
    /// 501 - syntax error in parameters or arguments
    (SyntaxErrorInArguments, 501);
    (CommandNotImplemented, 502);
    (BadCommandSequence, 503);
    (CommandNotImplementedForParameter, 504);
    /// 522 - extended port failure or TLS negotiation failed
    (ExtendedPortFailure, 522);
    /// 530 - not logged in
    (NotLoggedIn, 530);
    /// 532 - need account for storing files
    (NeedAccountForStoring, 532);
    /// 533 - command protection level denied for policy reasons
    (DeniedForPolicyReasons, 533);
    (RequestDenied, 534);
    /// 535 - failed security check
    (FailedSecurityCheck, 535);
    (RequestedProtLevelNotSupported, 536);
    /// 550 - requested action not taken, file unavailable
    (FileUnavailable, 550);
    (PageTypeUnknown, 551);
    /// 552 - requested file action aborted, exceeded storage allocation
    (StorageAllocationExceeded, 552);
    /// 553 - requested action not taken, file name not allowed
    (FileNameNotAllowed, 553);
    /// 631 - integrity protected reply
    (IntegrityProtectedReply, 631);
    /// 632 - confidentiality and integrity protected reply
    (ConfidentialityAndIntegrityReply, 632);
    /// 633 - confidentiality protected reply
    (ConfidentialityProtectedReply, 633);
}

impl FtpReplyCode {
    /// The outcome class of this reply code, by numeric range.
    pub fn status(&self) -> ReplyStatus {
        match self.code() {
            100..200 => ReplyStatus::PositivePreliminary,
            200..300 => ReplyStatus::PositiveCompletion,
            300..400 => ReplyStatus::PositiveIntermediate,
            400..500 => ReplyStatus::NegativeTransient,
            500..600 => ReplyStatus::NegativePermanent,
            _ => ReplyStatus::ProtectedReply,
        }
    }
}

impl fmt::Display for FtpReplyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
