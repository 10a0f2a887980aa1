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

use crate::Error;

/// Message options carried into every webhook payload.
///
/// `channel` and `username` are required when a payload is built; the icon options are
/// included only when set, and `link_names` only when true.
#[derive(Debug, Clone)]
pub(crate) struct MessageOptions {
    pub(crate) channel: Option<String>,
    pub(crate) username: Option<String>,
    pub(crate) icon_emoji: Option<String>,
    pub(crate) icon_url: Option<String>,
    pub(crate) link_names: bool,
}

impl Default for MessageOptions {
    fn default() -> Self {
        Self {
            channel: None,
            username: None,
            icon_emoji: None,
            icon_url: None,
            link_names: true,
        }
    }
}

/// Assemble the JSON body for one rendered record.
///
/// Keys are emitted in a fixed order: `text`, `channel`, `username`, then `icon_emoji`,
/// `icon_url`, and `link_names` when present. The order and the exact bytes are part of
/// the wire contract; consumers are known to assert on whole payloads.
///
/// Only double quotes are escaped. Rendered text containing backslashes or control
/// characters passes through verbatim and can produce a body the endpoint rejects.
/// This is a known limitation kept for byte-compatibility with existing consumers,
/// not a general JSON encoder.
pub(crate) fn build(text: &str, options: &MessageOptions) -> Result<Vec<u8>, Error> {
    let channel = options
        .channel
        .as_deref()
        .ok_or(Error::MissingOption("channel"))?;
    let username = options
        .username
        .as_deref()
        .ok_or(Error::MissingOption("username"))?;

    let mut fields = vec![
        format!("\"text\": \"{}\"", escape_quotes(text)),
        format!("\"channel\": \"{}\"", escape_quotes(channel)),
        format!("\"username\": \"{}\"", escape_quotes(username)),
    ];

    if let Some(icon_emoji) = options.icon_emoji.as_deref() {
        fields.push(format!("\"icon_emoji\": \"{}\"", escape_quotes(icon_emoji)));
    }
    if let Some(icon_url) = options.icon_url.as_deref() {
        fields.push(format!("\"icon_url\": \"{}\"", escape_quotes(icon_url)));
    }
    if options.link_names {
        fields.push("\"link_names\": 1".to_string());
    }

    Ok(format!("{{ {} }}", fields.join(", ")).into_bytes())
}

fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}
