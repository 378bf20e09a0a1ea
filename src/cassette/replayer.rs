//! Serves recorded interactions back in order.

use std::collections::{BTreeMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Replays a cassette with one queue per `(port, method)` pair.
///
/// Calls on different pairs do not disturb each other, so a replay only has
/// to match the recording's order within each pair.
pub struct CassetteReplayer {
    pending: BTreeMap<(String, String), VecDeque<Interaction>>,
    served: BTreeMap<(String, String), usize>,
}

impl CassetteReplayer {
    /// Splits the cassette's interactions into per-pair queues.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut pending: BTreeMap<(String, String), VecDeque<Interaction>> = BTreeMap::new();
        for interaction in &cassette.interactions {
            pending
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { pending, served: BTreeMap::new() }
    }

    /// Number of interactions not yet served, across all pairs.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.values().map(VecDeque::len).sum()
    }

    /// Takes the next interaction recorded for `port`/`method`.
    ///
    /// # Panics
    ///
    /// Panics when nothing is left for the pair. The message says whether the
    /// pair was never recorded or has run dry, and lists the recorded pairs.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());

        if let Some(interaction) = self.pending.get_mut(&key).and_then(VecDeque::pop_front) {
            *self.served.entry(key).or_insert(0) += 1;
            return interaction;
        }

        match self.served.get(&key) {
            Some(count) => panic!(
                "Cassette exhausted: all {count} interactions for {port}::{method} were already served."
            ),
            None => {
                let recorded: Vec<String> =
                    self.pending.keys().map(|(p, m)| format!("{p}::{m}")).collect();
                panic!(
                    "Cassette exhausted: no interactions recorded for {port}::{method}. \
                     Recorded pairs: [{}]",
                    recorded.join(", ")
                )
            }
        }
    }
}
