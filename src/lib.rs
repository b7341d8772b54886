//! Component exploration for minimal decycling sets of de Bruijn graphs
//!
//! A minimal decycling set (MDS) holds one word per rotation orbit and meets
//! every cycle of the de Bruijn graph. F-moves walk between MDSs of the same
//! component; I-moves jump to neighbouring components. Starting from one MDS,
//! the explorer enumerates every reachable component, identified by its
//! signature of legal I-moves, and writes the component graph.

#![forbid(unsafe_code)]

/// Breadth-first component-graph exploration with a worker pool
pub mod explorer;
/// Constraint analysis deciding which I-moves are legal
pub mod feasibility;
/// Input/output operations, configuration and error handling
pub mod io;
/// Decycling-set states, move lists and transformations
pub mod state;
/// Word encoding and rotation orbits
pub mod word;

pub use io::error::{DecyclingError, Result};
