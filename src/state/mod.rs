/// Decycling-set states, F-moves and move lists
pub mod decycling;
/// Tri-state membership vector
pub mod membership;
/// I-move transformation between components
pub mod traversal;
