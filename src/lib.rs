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

//! Logslack posts individual log records to Slack via an [incoming webhook].
//!
//! # Overview
//!
//! The [`Slack`](append::Slack) appender delivers one HTTP POST per log record. The host
//! logging setup decides which records reach the appender; the appender renders each record
//! with its [`Layout`], assembles the webhook JSON payload, and performs a single blocking
//! POST bounded by fixed timeouts. A record that cannot be delivered is reported to the
//! configured [`Trap`] and never disrupts the program being logged.
//!
//! # Examples
//!
//! ```no_run
//! use logslack::append::Slack;
//!
//! let slack = Slack::new()
//!     .with_webhook_url("https://hooks.slack.com/services/T00000000/B00000000/XXXXXXXX")
//!     .with_channel("#alerts")
//!     .with_username("logslack")
//!     .with_icon_emoji(":rotating_light:");
//!
//! log::set_boxed_logger(Box::new(slack)).unwrap();
//! log::set_max_level(log::LevelFilter::Warn);
//!
//! log::error!("Cannot reach the database.");
//! ```
//!
//! [incoming webhook]: https://api.slack.com/messaging/webhooks

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod layout;
pub mod trap;

pub use append::Append;
pub use layout::Layout;
pub use trap::Trap;

mod error;
pub use error::Error;
