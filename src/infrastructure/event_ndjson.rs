use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::PageAppended { existing, incoming } => {
            json!({"type":"page_appended","existing":existing,"incoming":incoming})
        }
        AppEvent::XPostsCombined {
            position,
            kept,
            absorbed_urls,
            folded,
        } => {
            json!({"type":"x_posts_combined","position":position,"kept":kept,"absorbed_urls":absorbed_urls,"folded":folded})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::stats::CombineStats;

    #[test]
    fn app_event_to_json_covers_all_variants() {
        let v = app_event_to_json(&AppEvent::PhaseStarted {
            name: "x".to_string(),
        });
        assert_eq!(v["type"], "phase_started");

        let v = app_event_to_json(&AppEvent::PhaseFinished {
            name: "x".to_string(),
        });
        assert_eq!(v["type"], "phase_finished");

        let v = app_event_to_json(&AppEvent::PageAppended {
            existing: 3,
            incoming: 2,
        });
        assert_eq!(v["type"], "page_appended");
        assert_eq!(v["incoming"], 2);

        let v = app_event_to_json(&AppEvent::XPostsCombined {
            position: 4,
            kept: "https://a.example/1".to_string(),
            absorbed_urls: vec!["https://b.example/1".to_string()],
            folded: 1,
        });
        assert_eq!(v["type"], "x_posts_combined");
        assert_eq!(v["position"], 4);
        assert_eq!(v["absorbed_urls"][0], "https://b.example/1");

        let v = app_event_to_json(&AppEvent::Finished {
            stats: CombineStats {
                items_seen: 5,
                ..CombineStats::default()
            },
        });
        assert_eq!(v["type"], "finished");
        assert_eq!(v["stats"]["items_seen"], 5);
    }

    #[tokio::test]
    async fn spawn_ndjson_printer_drains_and_exits() {
        let (tx, rx) = mpsc::channel::<AppEvent>(8);
        let handle = spawn_ndjson_printer(rx);

        tx.send(AppEvent::PhaseStarted {
            name: "x".to_string(),
        })
        .await
        .expect("send");
        drop(tx);

        handle.await.expect("join");
    }
}
