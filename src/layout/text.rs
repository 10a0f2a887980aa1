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
use crate::layout::Layout;

/// A layout that renders a log record as its level tag followed by the message.
///
/// Output format:
///
/// ```text
/// [INFO] Deployed build 1042, migrations applied
/// [ERROR] Cannot reach the database.
/// ```
///
/// Each line ends with a newline. No timestamp is included; the chat destination
/// attaches its own to every message.
///
/// # Examples
///
/// ```
/// use logslack::layout::TextLayout;
///
/// let text_layout = TextLayout::default();
/// ```
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct TextLayout {}

impl Layout for TextLayout {
    fn format(&self, record: &log::Record) -> Result<Vec<u8>, Error> {
        Ok(format!("[{}] {}\n", record.level(), record.args()).into_bytes())
    }
}
