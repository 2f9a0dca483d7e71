// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

#![allow(non_snake_case)]

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

use backtrace::Backtrace;
use thiserror::Error;

#[derive(Error)]
pub struct ErrorCode {
    code: u16,
    display_text: String,
    cause: Option<Box<dyn std::error::Error + Sync + Send>>,
    backtrace: Option<Backtrace>,
}

pub type Result<T> = std::result::Result<T, ErrorCode>;

macro_rules! as_item {
    ($i:item) => {
        $i
    };
}

macro_rules! build_exceptions {
    ($($body:ident($code:expr)),*) => {
        as_item! {
            impl ErrorCode {
                $(
                pub fn $body(display_text: impl Into<String>) -> ErrorCode {
                    ErrorCode {
                        code: $code,
                        display_text: display_text.into(),
                        cause: None,
                        backtrace: Some(Backtrace::new()),
                    }
                })*
            }
        }
    }
}

build_exceptions! {
    UnImplement(2),
    BadArguments(6),
    IllegalDataType(7),
    UnknownFunction(8),
    BadDataValueType(10),
    LogicalError(15),
    NumberArgumentsNotMatch(16),
    IllegalColumnShape(17),
    DivisionByZero(18),
    DivisionOverflow(19),

    UnknownException(1000)
}

impl ErrorCode {
    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn message(&self) -> String {
        self.cause
            .as_ref()
            .map(|cause| cause.to_string())
            .unwrap_or_else(|| self.display_text.clone())
    }

    pub fn add_message(self, msg: impl AsRef<str>) -> Self {
        Self {
            code: self.code,
            display_text: format!("{}\n{}", msg.as_ref(), self.display_text),
            cause: self.cause,
            backtrace: self.backtrace,
        }
    }

    pub fn from_anyhow(error: anyhow::Error) -> ErrorCode {
        ErrorCode {
            code: 1001,
            display_text: format!("{}", error),
            cause: None,
            backtrace: Some(Backtrace::new()),
        }
    }
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Code: {}, displayText = {}.", self.code, self.message())?;
        match self.backtrace.as_ref() {
            None => Ok(()),
            Some(backtrace) => write!(f, "\n\n{:?}", backtrace),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Code: {}, displayText = {}.", self.code, self.message())
    }
}

impl From<anyhow::Error> for ErrorCode {
    fn from(error: anyhow::Error) -> Self {
        ErrorCode::from_anyhow(error)
    }
}
