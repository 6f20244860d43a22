// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One line of a replay file.
//!
//! ```text
//! s <query_id> <match_type> <match_dist> <num_keywords> <keyword>...
//! e <query_id>
//! m <doc_id> <num_words> <word>...
//! r <doc_id> <num_res> <query_id>...
//! ```
//!
//! The declared counts of `s` and `m` lines are informational: keywords and
//! words are whatever follows them. The count of an `r` line is part of the
//! expectation and is checked against the retrieved result.

use std::str::FromStr;

use super::ReplayError;
use crate::types::{DocId, MatchMode, QueryId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start {
        id: QueryId,
        mode: MatchMode,
        keywords: String,
    },
    End {
        id: QueryId,
    },
    Match {
        doc_id: DocId,
        content: String,
    },
    Retrieve {
        doc_id: DocId,
        count: usize,
        query_ids: Vec<QueryId>,
    },
}

impl Command {
    /// Parse line `line_no` (1-based). Blank lines yield `None`.
    pub fn parse(line_no: usize, line: &str) -> Result<Option<Command>, ReplayError> {
        let mut fields = line.split_whitespace();
        let Some(tag) = fields.next() else {
            return Ok(None);
        };
        let mut cursor = Fields { line_no, fields };

        let command = match tag {
            "s" => {
                let id = QueryId(cursor.number("query id")?);
                let match_type: u32 = cursor.number("match type")?;
                let match_dist: u32 = cursor.number("match distance")?;
                let _declared: usize = cursor.number("keyword count")?;
                let mode = MatchMode::from_parts(match_type, match_dist)
                    .map_err(|err| ReplayError::parse(line_no, err.to_string()))?;
                Command::Start {
                    id,
                    mode,
                    keywords: cursor.rest(),
                }
            }
            "e" => Command::End {
                id: QueryId(cursor.number("query id")?),
            },
            "m" => {
                let doc_id = DocId(cursor.number("doc id")?);
                let _declared: usize = cursor.number("word count")?;
                Command::Match {
                    doc_id,
                    content: cursor.rest(),
                }
            }
            "r" => {
                let doc_id = DocId(cursor.number("doc id")?);
                let count = cursor.number("result count")?;
                let mut query_ids = Vec::new();
                while let Some(raw) = cursor.fields.next() {
                    query_ids.push(QueryId(parse_number(line_no, "query id", raw)?));
                }
                Command::Retrieve {
                    doc_id,
                    count,
                    query_ids,
                }
            }
            other => {
                return Err(ReplayError::parse(line_no, format!("unknown command {:?}", other)));
            }
        };

        Ok(Some(command))
    }
}

struct Fields<'a, I: Iterator<Item = &'a str>> {
    line_no: usize,
    fields: I,
}

impl<'a, I: Iterator<Item = &'a str>> Fields<'a, I> {
    fn number<T: FromStr>(&mut self, what: &str) -> Result<T, ReplayError> {
        let raw = self
            .fields
            .next()
            .ok_or_else(|| ReplayError::parse(self.line_no, format!("missing {}", what)))?;
        parse_number(self.line_no, what, raw)
    }

    /// Remaining fields joined by single spaces.
    fn rest(self) -> String {
        self.fields.collect::<Vec<_>>().join(" ")
    }
}

fn parse_number<T: FromStr>(line_no: usize, what: &str, raw: &str) -> Result<T, ReplayError> {
    raw.parse()
        .map_err(|_| ReplayError::parse(line_no, format!("invalid {} {:?}", what, raw)))
}
