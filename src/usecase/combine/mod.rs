mod append;

pub use append::append_page;

use crate::domain::stream::fold_adjacent_runs;
use crate::domain::traits::XPostMatcher;
use crate::infrastructure::serde_json_adapter::StreamFileDto;
use crate::usecase::event::AppEvent;
use crate::usecase::stats::CombineStats;
use anyhow::Result;
use tokio::sync::mpsc;

pub async fn combine_stream(
    input: StreamFileDto,
    matcher: &dyn XPostMatcher,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(StreamFileDto, CombineStats)> {
    let mut stats = CombineStats {
        items_seen: input.items.len(),
        ..CombineStats::default()
    };

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "combine_x_posts".into(),
        },
    )
    .await;

    let runs = fold_adjacent_runs(&input.items, matcher);
    let mut items = Vec::with_capacity(runs.len());
    for run in runs {
        if run.folded > 0 {
            stats.x_posts_folded += run.folded;
            stats.duplicate_urls_missing += run.missing_urls;

            // Only the urls gained in this pass; the base may already carry some.
            let already = input.items[run.position].x_post_urls.len();
            emit(
                &sink,
                AppEvent::XPostsCombined {
                    position: run.position,
                    kept: run.record.label(),
                    absorbed_urls: run.record.x_post_urls[already..].to_vec(),
                    folded: run.folded,
                },
            )
            .await;
        }
        items.push(run.record);
    }
    stats.items_emitted = items.len();

    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "combine_x_posts".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;

    let out = StreamFileDto { items, ..input };
    Ok((out, stats))
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
