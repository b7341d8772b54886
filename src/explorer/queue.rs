//! File-backed FIFO of components waiting for expansion
//!
//! Records are appended to a single log file and read back through an
//! independent cursor. Nothing is ever removed from the log, so its size
//! grows with the number of discovered components rather than with memory.

use crate::feasibility::signature::{IMove, Signature};
use crate::io::error::{IoResultExt, Result, corrupt_record};
use crate::state::decycling::MoveList;
use crate::word::alphabet::{Alphabet, Slot};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// A component waiting in the queue
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueElement {
    /// Node id of the component
    pub id: u64,
    /// Applicable-move list of one state of the component
    pub moves: MoveList,
    /// I-move signature of the component
    pub signature: Signature,
}

impl QueueElement {
    /// Tab-separated record: id, moves, signature length, signature
    pub fn encode(&self) -> String {
        let moves = self
            .moves
            .iter()
            .map(Slot::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "{}\t{moves}\t{}\t{}\n",
            self.id,
            self.signature.len(),
            self.signature
        )
    }

    /// Parse a record against the slot count and masks of `alphabet`
    ///
    /// # Errors
    ///
    /// Returns `CorruptQueueRecord` with the raw line when a field is missing,
    /// unparseable, out of range, badly separated, or the declared counts do
    /// not match
    pub fn decode(record: &[u8], alphabet: &Alphabet) -> Result<Self> {
        let corrupt = |reason: &str| corrupt_record(record, &reason);
        let Some(line) = record.strip_suffix(b"\n") else {
            return Err(corrupt("truncated record"));
        };
        let line = std::str::from_utf8(line)
            .map_err(|error| corrupt(&format!("not UTF-8: {error}")))?;

        let fields: Vec<&str> = line.split('\t').collect();
        let [id, moves, count, imoves] = fields.as_slice() else {
            return Err(corrupt("expected 4 tab-separated fields"));
        };

        let id = id
            .parse::<u64>()
            .map_err(|error| corrupt(&format!("bad node id: {error}")))?;

        let nb_slots = alphabet.nb_slots();
        let moves = tokens(moves)
            .ok_or_else(|| corrupt("misplaced separator in move list"))?
            .into_iter()
            .map(str::parse::<Slot>)
            .collect::<std::result::Result<MoveList, _>>()
            .map_err(|error| corrupt(&format!("bad move slot: {error}")))?;
        if moves.len() as u64 != nb_slots {
            return Err(corrupt("move list length differs from the slot count"));
        }
        if moves.iter().any(|&slot| slot >= nb_slots) {
            return Err(corrupt("move slot out of range"));
        }

        let count = count
            .parse::<usize>()
            .map_err(|error| corrupt(&format!("bad signature length: {error}")))?;
        let signature = tokens(imoves)
            .ok_or_else(|| corrupt("misplaced separator in signature"))?
            .into_iter()
            .map(str::parse::<IMove>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|error| corrupt(&error.to_string()))?;
        if signature.len() != count {
            return Err(corrupt("signature length differs from its declared count"));
        }
        if signature.iter().any(|imove| imove.slot >= nb_slots) {
            return Err(corrupt("I-move slot out of range"));
        }
        let full = alphabet.full_mask();
        if signature
            .iter()
            .any(|imove| imove.mask == 0 || imove.mask >= full)
        {
            return Err(corrupt("I-move mask redirects no companion or all of them"));
        }

        Ok(Self {
            id,
            moves,
            signature: Signature::new(signature),
        })
    }
}

// Single-space separated tokens, `None` on an empty token
fn tokens(field: &str) -> Option<Vec<&str>> {
    if field.is_empty() {
        return Some(Vec::new());
    }
    let tokens: Vec<&str> = field.split(' ').collect();
    tokens.iter().all(|token| !token.is_empty()).then_some(tokens)
}

/// Append-only log with separate read and write cursors
///
/// The queue is empty exactly when the read cursor has caught up with the
/// write cursor. Callers serialize access (one lock around the queue).
pub struct FileQueue {
    path: PathBuf,
    alphabet: Alphabet,
    writer: BufWriter<File>,
    reader: BufReader<File>,
    read_offset: u64,
    write_offset: u64,
    buffer: Vec<u8>,
}

impl FileQueue {
    /// Create (or truncate) the log at `path`
    ///
    /// # Errors
    ///
    /// Returns a file system error if the log cannot be created or reopened
    /// for reading
    pub fn create(path: &Path, alphabet: Alphabet) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .at_path(path, "create queue log")?;
        let reader = File::open(path).at_path(path, "open queue log for reading")?;

        Ok(Self {
            path: path.to_path_buf(),
            alphabet,
            writer: BufWriter::new(file),
            reader: BufReader::new(reader),
            read_offset: 0,
            write_offset: 0,
            buffer: Vec::new(),
        })
    }

    /// Log location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read cursor caught up with the write cursor
    pub const fn is_empty(&self) -> bool {
        self.read_offset == self.write_offset
    }

    /// Bytes written so far
    pub const fn write_offset(&self) -> u64 {
        self.write_offset
    }

    /// Bytes consumed so far
    pub const fn read_offset(&self) -> u64 {
        self.read_offset
    }

    /// Append and flush one record
    ///
    /// # Errors
    ///
    /// Returns a file system error if the record cannot be written
    pub fn enqueue(&mut self, element: &QueueElement) -> Result<()> {
        let record = element.encode();
        self.writer
            .write_all(record.as_bytes())
            .and_then(|()| self.writer.flush())
            .at_path(&self.path, "append queue record")?;
        self.write_offset += record.len() as u64;
        Ok(())
    }

    /// Read the next record, `None` when the queue is empty
    ///
    /// # Errors
    ///
    /// Returns a file system error if the log cannot be read and
    /// `CorruptQueueRecord` if the record does not decode
    pub fn dequeue(&mut self) -> Result<Option<QueueElement>> {
        if self.is_empty() {
            return Ok(None);
        }

        self.buffer.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buffer)
            .at_path(&self.path, "read queue record")?;
        self.read_offset += read as u64;

        QueueElement::decode(&self.buffer, &self.alphabet).map(Some)
    }
}
