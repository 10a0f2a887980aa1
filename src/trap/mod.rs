// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Traps for reporting delivery failures.
//!
//! A failure to deliver a log record must be observable without ever interrupting the
//! program being logged. The appender funnels every failure into its trap; operators
//! watching for delivery outages watch the trap output, not the chat channel.

use std::fmt;

use crate::Error;

mod default;

pub use self::default::DefaultTrap;

/// A trap receives delivery failures that must not disrupt the caller.
pub trait Trap: fmt::Debug + Send + Sync + 'static {
    /// Report a failure, given its context message and the causing error.
    fn trap(&self, message: &str, error: &Error);
}

impl<T: Trap> From<T> for Box<dyn Trap> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
