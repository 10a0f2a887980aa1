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

use std::time::Duration;

use ureq::Agent;
use ureq::AgentBuilder;

use crate::Error;

/// Bound on both opening the connection and reading the reply. A downed or slow endpoint
/// must not stall the logging thread indefinitely.
const TIMEOUT: Duration = Duration::from_millis(50_000);

/// A blocking HTTP client that delivers payloads to a webhook endpoint.
///
/// One request per call, no retries: delivery is a single attempt so that the logging
/// path stays latency-bounded and side-effect-simple.
#[derive(Debug)]
pub(crate) struct WebhookClient {
    agent: Agent,
}

impl WebhookClient {
    pub(crate) fn new() -> Self {
        let agent = AgentBuilder::new()
            .timeout_connect(TIMEOUT)
            .timeout_read(TIMEOUT)
            .redirects(0)
            .build();
        Self { agent }
    }

    /// POST `body` to `url` and treat any reply other than 200 OK as an error.
    pub(crate) fn post(&self, url: &str, body: &[u8]) -> Result<(), Error> {
        let response = match self
            .agent
            .post(url)
            .set("Content-Type", "application/json")
            .send_bytes(body)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(err)) => return Err(Error::Transport(Box::new(err))),
        };

        if response.status() != 200 {
            return Err(Error::Rejected {
                status: response.status(),
                status_text: response.status_text().to_string(),
                body: String::from_utf8_lossy(body).into_owned(),
            });
        }

        Ok(())
    }
}
