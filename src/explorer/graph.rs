//! Graphviz DOT output of the component graph

use crate::io::configuration::{GRAPH_FOOTER, GRAPH_HEADER, NODE_PREFIX};
use crate::io::error::{DecyclingError, Result};
use crate::word::alphabet::Slot;
use parking_lot::Mutex;
use std::io::Write;

/// Serializes edge lines from all workers into one DOT document
pub struct GraphWriter<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> GraphWriter<W> {
    /// Write the opening line
    ///
    /// # Errors
    ///
    /// Returns `GraphOutput` if the header cannot be written
    pub fn begin(mut out: W) -> Result<Self> {
        writeln!(out, "{GRAPH_HEADER}").map_err(|source| DecyclingError::GraphOutput { source })?;
        Ok(Self {
            out: Mutex::new(out),
        })
    }

    /// One `src -> dst` line labelled with the I-move slot
    ///
    /// # Errors
    ///
    /// Returns `GraphOutput` if the line cannot be written
    pub fn edge(&self, source: u64, target: u64, slot: Slot) -> Result<()> {
        let mut out = self.out.lock();
        writeln!(
            out,
            "  {NODE_PREFIX}{source} -> {NODE_PREFIX}{target} [label=\"{slot}\"];"
        )
        .map_err(|error| DecyclingError::GraphOutput { source: error })
    }

    /// Write the closing line, flush, and hand the sink back
    ///
    /// # Errors
    ///
    /// Returns `GraphOutput` if the footer cannot be written or flushed
    pub fn finish(self) -> Result<W> {
        let mut out = self.out.into_inner();
        writeln!(out, "{GRAPH_FOOTER}")
            .and_then(|()| out.flush())
            .map_err(|source| DecyclingError::GraphOutput { source })?;
        Ok(out)
    }
}
