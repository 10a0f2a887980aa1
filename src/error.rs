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

/// Errors raised while building or delivering a webhook payload.
///
/// Every variant is terminal for the record that triggered it and non-fatal for the
/// process: the appender reports the error to its [`Trap`](crate::Trap) and moves on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required option is not configured on the appender.
    #[error("{0} is not specified")]
    MissingOption(&'static str),

    /// The layout failed to render the log record.
    #[error("failed to format the log record: {0}")]
    Format(anyhow::Error),

    /// The connection to the endpoint could not be opened, written to, or read from.
    ///
    /// Timeout expiry surfaces here as well.
    #[error("failed to reach the webhook endpoint: {0}")]
    Transport(#[source] Box<ureq::Transport>),

    /// The endpoint replied with a status other than 200 OK.
    ///
    /// Carries the reply status and the request body so that operators can reproduce the
    /// rejected payload from the trap output alone.
    #[error("the webhook endpoint replied {status} {status_text}\n{body}")]
    Rejected {
        status: u16,
        status_text: String,
        body: String,
    },
}
