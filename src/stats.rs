//! Derived metrics for the dashboard's summary cards

use serde::Serialize;

use crate::experiment::{Experiment, ExperimentStatus};

/// Summary counts over a collection of experiments.
///
/// `wins + losses + inconclusive + running == total` for every input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExperimentStats {
    /// Number of records.
    pub total: usize,
    /// Records that ended as a win.
    pub wins: usize,
    /// Records that ended as a loss.
    pub losses: usize,
    /// Records that ended without a significant result.
    pub inconclusive: usize,
    /// Records without a result.
    pub running: usize,
    /// Sum of showcase votes (absent counts as 0).
    pub total_votes: u64,
}

/// One labelled summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    /// Card label.
    pub label: &'static str,
    /// Card value.
    pub value: u64,
}

impl ExperimentStats {
    /// Aggregate `experiments` in a single pass.
    #[must_use]
    pub fn from_experiments<'a, I>(experiments: I) -> Self
    where
        I: IntoIterator<Item = &'a Experiment>,
    {
        experiments
            .into_iter()
            .fold(Self::default(), |mut stats, experiment| {
                stats.total += 1;
                stats.total_votes += u64::from(experiment.votes());
                match experiment.status() {
                    ExperimentStatus::Win => stats.wins += 1,
                    ExperimentStatus::Loss => stats.losses += 1,
                    ExperimentStatus::Inconclusive => stats.inconclusive += 1,
                    ExperimentStatus::Running => stats.running += 1,
                }
                stats
            })
    }

    /// The six summary cards, in display order.
    #[must_use]
    pub fn cards(&self) -> [StatCard; 6] {
        let card = |label, value: usize| StatCard {
            label,
            value: value as u64,
        };
        [
            card("Total Experiments", self.total),
            card("Wins", self.wins),
            card("Losses", self.losses),
            card("Inconclusive", self.inconclusive),
            card("Running", self.running),
            StatCard {
                label: "Total Votes",
                value: self.total_votes,
            },
        ]
    }
}
