// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Replay of recorded command files against a matching core.
//!
//! A replay file interleaves query starts and ends, documents, and the results
//! those documents are expected to produce (see [`Command`] for the format).
//! Every call's return is checked; the first failure stops the run and is
//! reported with its line number.

mod command;

pub use command::Command;

use std::io::BufRead;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::error::MatchError;
use crate::protocol::MatchingCore;
use crate::types::{DocId, QueryId};

/// Why a replay stopped.
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("failed to read replay input: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The core refused a call the file expects to succeed.
    #[error("line {line}: {call} failed: {source}")]
    Call {
        line: usize,
        call: &'static str,
        source: MatchError,
    },

    /// A retrieved result differs from the recorded one.
    #[error("line {line}: expected doc {expected_doc} with {expected_ids:?}, got doc {got_doc} with {got_ids:?}")]
    Mismatch {
        line: usize,
        expected_doc: DocId,
        expected_ids: Vec<QueryId>,
        got_doc: DocId,
        got_ids: Vec<QueryId>,
    },
}

impl ReplayError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        ReplayError::Parse {
            line,
            reason: reason.into(),
        }
    }
}

/// Counts of what a replay did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub queries_started: usize,
    pub queries_ended: usize,
    pub documents: usize,
    pub results_checked: usize,
}

/// Run every command in `reader` against `core`.
///
/// The core is reset before the first line and after the last, pass or fail.
pub fn replay<C, R>(core: &mut C, reader: R) -> Result<ReplaySummary, ReplayError>
where
    C: MatchingCore + ?Sized,
    R: BufRead,
{
    replay_with_progress(core, reader, |_| {})
}

/// [`replay`], reporting the number of input bytes consumed after each line.
pub fn replay_with_progress<C, R, P>(
    core: &mut C,
    reader: R,
    progress: P,
) -> Result<ReplaySummary, ReplayError>
where
    C: MatchingCore + ?Sized,
    R: BufRead,
    P: FnMut(u64),
{
    core.initialize_index();
    let outcome = run(core, reader, progress);
    core.destroy_index();

    match &outcome {
        Ok(summary) => info!(
            started = summary.queries_started,
            ended = summary.queries_ended,
            documents = summary.documents,
            checked = summary.results_checked,
            "replay passed"
        ),
        Err(err) => info!(%err, "replay failed"),
    }
    outcome
}

fn run<C, R, P>(core: &mut C, mut reader: R, mut progress: P) -> Result<ReplaySummary, ReplayError>
where
    C: MatchingCore + ?Sized,
    R: BufRead,
    P: FnMut(u64),
{
    let mut summary = ReplaySummary::default();
    let mut consumed = 0u64;
    let mut line = String::new();
    let mut line_no = 0;

    loop {
        line.clear();
        let read = reader.read_line(&mut line)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        consumed += read as u64;

        if let Some(command) = Command::parse(line_no, &line)? {
            apply(core, line_no, command, &mut summary)?;
        }
        progress(consumed);
    }

    Ok(summary)
}

fn apply<C: MatchingCore + ?Sized>(
    core: &mut C,
    line: usize,
    command: Command,
    summary: &mut ReplaySummary,
) -> Result<(), ReplayError> {
    let call = |call: &'static str| move |source: MatchError| ReplayError::Call { line, call, source };

    match command {
        Command::Start { id, mode, keywords } => {
            core.start_query(id, &keywords, mode)
                .map_err(call("start_query"))?;
            summary.queries_started += 1;
        }
        Command::End { id } => {
            core.end_query(id).map_err(call("end_query"))?;
            summary.queries_ended += 1;
        }
        Command::Match { doc_id, content } => {
            core.match_document(doc_id, &content)
                .map_err(call("match_document"))?;
            summary.documents += 1;
        }
        Command::Retrieve {
            doc_id,
            count,
            mut query_ids,
        } => {
            let got = core.get_next_avail_res().map_err(call("get_next_avail_res"))?;
            query_ids.sort_unstable();
            debug!(line, doc = %got.doc_id, matched = got.match_count(), "result retrieved");

            if got.doc_id != doc_id || got.match_count() != count || got.query_ids != query_ids {
                return Err(ReplayError::Mismatch {
                    line,
                    expected_doc: doc_id,
                    expected_ids: query_ids,
                    got_doc: got.doc_id,
                    got_ids: got.query_ids,
                });
            }
            summary.results_checked += 1;
        }
    }
    Ok(())
}
