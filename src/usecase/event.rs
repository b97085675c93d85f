use crate::usecase::stats::CombineStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    PageAppended {
        existing: usize,
        incoming: usize,
    },

    XPostsCombined {
        position: usize,
        kept: String,
        absorbed_urls: Vec<String>,
        folded: usize,
    },

    Finished {
        stats: CombineStats,
    },
}
