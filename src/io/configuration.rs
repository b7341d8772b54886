//! Alphabet limits, signature hashing and worker-pool defaults

use std::time::Duration;

// Word encoding limits
/// Widest word encoding accepted, in bits
pub const MAX_WORD_BITS: u32 = 34;
/// Largest alphabet (I-move masks are stored in a byte)
pub const MAX_ALPHABET_SIZE: u32 = 8;
/// Smallest alphabet with any cycle worth breaking
pub const MIN_ALPHABET_SIZE: u32 = 2;
/// Shortest word length (a move slot needs at least one symbol)
pub const MIN_WORD_LENGTH: u32 = 2;

/// Seed of the xxHash64 content hash of I-move signatures
pub const SIGNATURE_HASH_SEED: u64 = 0xd336_ea32_c33c_e21f;

// Worker pool behaviour on an empty queue
/// Pause between two looks at an empty queue
pub const IDLE_WAIT: Duration = Duration::from_millis(50);
/// Consecutive empty looks (with no expansion in flight) before a worker exits
pub const IDLE_ROUNDS: u32 = 2;

// Graph output syntax
/// First line of the component graph
pub const GRAPH_HEADER: &str = "digraph {";
/// Last line of the component graph
pub const GRAPH_FOOTER: &str = "}";
/// Prefix of node names in the component graph
pub const NODE_PREFIX: char = 'n';

// Progress bar display settings
/// Spinner refresh interval
pub const PROGRESS_TICK: Duration = Duration::from_millis(120);

// Default values for configurable parameters
/// Default alphabet size (binary words)
pub const DEFAULT_ALPHABET_SIZE: u32 = 2;
/// Default worker count, `0` meaning one worker per available core
pub const DEFAULT_THREADS: usize = 0;
