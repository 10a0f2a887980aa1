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
use crate::append::Append;
use crate::layout::Layout;
use crate::layout::TextLayout;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

mod client;
mod payload;

use self::client::WebhookClient;
use self::payload::MessageOptions;

/// The context message attached to every trapped delivery failure.
const POST_FAILED: &str = "failed to post a log to the endpoint";

/// An appender that posts each log record to Slack via an [incoming webhook].
///
/// Every record is rendered by the configured [`Layout`] into its own buffer, wrapped
/// into the webhook JSON payload, and delivered with one blocking HTTP POST on the
/// calling thread, bounded by fixed connect and read timeouts. There is no batching and
/// no retry: a record either lands with this attempt or its failure is reported to the
/// configured [`Trap`].
///
/// The webhook URL, channel, and username must be set before the first record is
/// appended; missing options surface as configuration errors per record, through the
/// trap, never as panics.
///
/// `Slack` implements [`log::Log`], so it can serve as the global logger directly or be
/// embedded in any dispatcher that drives [`Append`].
///
/// # Examples
///
/// ```no_run
/// use logslack::append::Slack;
///
/// let slack = Slack::new()
///     .with_webhook_url("https://hooks.slack.com/services/T00000000/B00000000/XXXXXXXX")
///     .with_channel("#alerts")
///     .with_username("logslack");
///
/// log::set_boxed_logger(Box::new(slack)).unwrap();
/// log::set_max_level(log::LevelFilter::Warn);
/// ```
///
/// [incoming webhook]: https://api.slack.com/messaging/webhooks
#[derive(Debug)]
pub struct Slack {
    webhook_url: Option<String>,
    options: MessageOptions,
    layout: Box<dyn Layout>,
    trap: Box<dyn Trap>,
    client: WebhookClient,
}

impl Default for Slack {
    fn default() -> Self {
        Self::new()
    }
}

impl Slack {
    /// Creates a new [`Slack`] appender with no delivery options set.
    pub fn new() -> Self {
        Self {
            webhook_url: None,
            options: MessageOptions::default(),
            layout: Box::new(TextLayout::default()),
            trap: Box::new(DefaultTrap::default()),
            client: WebhookClient::new(),
        }
    }

    /// Set the webhook URL to post to. Required.
    ///
    /// The URL itself is the credential; no authentication headers are sent.
    pub fn with_webhook_url(mut self, webhook_url: impl Into<String>) -> Self {
        self.webhook_url = Some(webhook_url.into());
        self
    }

    /// Set the channel messages are posted to. Required.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.options.channel = Some(channel.into());
        self
    }

    /// Set the username messages are posted as. Required.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.options.username = Some(username.into());
        self
    }

    /// Set the emoji used as the message icon, e.g. `:ghost:`.
    pub fn with_icon_emoji(mut self, icon_emoji: impl Into<String>) -> Self {
        self.options.icon_emoji = Some(icon_emoji.into());
        self
    }

    /// Set the image URL used as the message icon.
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.options.icon_url = Some(icon_url.into());
        self
    }

    /// Set whether channel and user names in the message are linkified.
    ///
    /// Default to `true`.
    pub fn with_link_names(mut self, link_names: bool) -> Self {
        self.options.link_names = link_names;
        self
    }

    /// Set the layout for rendering records into message text.
    ///
    /// Default to [`TextLayout`].
    ///
    /// # Examples
    ///
    /// ```
    /// use logslack::append::Slack;
    /// use logslack::layout::TextLayout;
    ///
    /// let slack = Slack::new().with_layout(TextLayout::default());
    /// ```
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Set the trap for reporting delivery failures.
    ///
    /// Default to [`DefaultTrap`].
    pub fn with_trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }
}

impl Append for Slack {
    fn append(&self, record: &log::Record) -> Result<(), Error> {
        let rendered = self.layout.format(record)?;
        let text = String::from_utf8_lossy(&rendered);
        let body = payload::build(&text, &self.options)?;
        let url = self
            .webhook_url
            .as_deref()
            .ok_or(Error::MissingOption("webhook URL"))?;
        self.client.post(url, &body)
    }
}

impl log::Log for Slack {
    // Filtering belongs to the host setup; every record handed over is delivered.
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Err(err) = self.append(record) {
            self.trap.trap(POST_FAILED, &err);
        }
    }

    fn flush(&self) {}
}
