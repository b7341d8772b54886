/// Worker pool driving the breadth-first search
pub mod component;
/// DOT output of the component graph
pub mod graph;
/// File-backed frontier queue
pub mod queue;
/// Signature deduplication table
pub mod table;
