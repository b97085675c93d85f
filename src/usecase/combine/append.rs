use super::{combine_stream, emit};
use crate::domain::model::PostKey;
use crate::domain::traits::XPostMatcher;
use crate::infrastructure::serde_json_adapter::StreamFileDto;
use crate::usecase::event::AppEvent;
use crate::usecase::stats::CombineStats;
use anyhow::Result;
use tokio::sync::mpsc;

/// Appends a freshly fetched page and recombines the whole stream.
///
/// The fold is not incremental, so the full sequence goes through it again;
/// an x-post straddling the page boundary lands on the stream's last record.
pub async fn append_page(
    mut stream: StreamFileDto,
    page: Vec<PostKey>,
    matcher: &dyn XPostMatcher,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(StreamFileDto, CombineStats)> {
    emit(
        &sink,
        AppEvent::PageAppended {
            existing: stream.items.len(),
            incoming: page.len(),
        },
    )
    .await;

    stream.items.extend(page);
    combine_stream(stream, matcher, sink).await
}
