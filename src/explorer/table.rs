//! Shared signature → node id table

use crate::feasibility::signature::Signature;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Deduplicates components by signature and hands out node ids
///
/// Ids are assigned in insertion order starting at 0. A single lock guards
/// the map; the lookup-then-insert sequence is atomic under it.
#[derive(Debug, Default)]
pub struct SignatureTable {
    nodes: Mutex<HashMap<Signature, u64>>,
}

impl SignatureTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the signature and whether this call inserted it
    pub fn insert_or_lookup(&self, signature: &Signature) -> (u64, bool) {
        let mut nodes = self.nodes.lock();
        if let Some(&id) = nodes.get(signature) {
            return (id, false);
        }
        let id = nodes.len() as u64;
        nodes.insert(signature.clone(), id);
        (id, true)
    }

    /// Signatures ordered by node id
    pub fn into_signatures(self) -> Vec<Signature> {
        let mut nodes: Vec<(u64, Signature)> = self
            .nodes
            .into_inner()
            .into_iter()
            .map(|(signature, id)| (id, signature))
            .collect();
        nodes.sort_unstable_by_key(|&(id, _)| id);
        nodes.into_iter().map(|(_, signature)| signature).collect()
    }
}
