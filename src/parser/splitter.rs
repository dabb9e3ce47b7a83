// Copyright 2024 OctoFHIR Team
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

//! Splitting of multi-message files at MSH boundaries

use super::delimiters::HEADER_SEGMENT;
use super::tokenizer::{segment_lines, segment_type};
use std::iter::Peekable;

/// Segment separator used when re-joining the lines of a message
pub const SEGMENT_SEPARATOR: char = '\r';

fn is_header(line: &str) -> bool {
    segment_type(line.trim_start()) == HEADER_SEGMENT
}

/// Lazy iterator over the messages of a file.
///
/// Each item is one message with its segments joined by `\r`. Lines before
/// the first MSH are discarded. A clone resumes from the same position, and
/// [`MessageSplitter::new`] restarts from the beginning.
#[derive(Debug, Clone)]
pub struct MessageSplitter<'a> {
    lines: Peekable<std::vec::IntoIter<&'a str>>,
}

impl<'a> MessageSplitter<'a> {
    /// Create a splitter over file content
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: segment_lines(content).collect::<Vec<_>>().into_iter().peekable(),
        }
    }
}

impl<'a> Iterator for MessageSplitter<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        // Skip anything ahead of the next header
        while let Some(line) = self.lines.peek() {
            if is_header(line) {
                break;
            }
            log::debug!("Discarding line outside of a message: {line}");
            self.lines.next();
        }

        let mut message = String::from(self.lines.next()?);
        while let Some(line) = self.lines.next_if(|line| !is_header(line)) {
            message.push(SEGMENT_SEPARATOR);
            message.push_str(line);
        }
        Some(message)
    }
}

/// Split file content into individual raw messages
pub fn split_messages(content: &str) -> Vec<String> {
    MessageSplitter::new(content).collect()
}
