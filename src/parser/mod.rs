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

//! HL7 v2 message parser
//!
//! Turns pipe-delimited text into a [`ParsedMessage`](crate::model::ParsedMessage):
//! delimiter discovery, segment tokenization and multi-message splitting.

pub mod delimiters;
pub mod splitter;
pub mod tokenizer;

pub use delimiters::{DelimiterSet, HEADER_SEGMENT};
pub use splitter::{MessageSplitter, split_messages};
pub use tokenizer::parse_message;
