/// Constraint search and signature emission
pub mod analyzer;
/// Per-slot constraint matrices
pub mod constraints;
/// I-moves and component signatures
pub mod signature;
