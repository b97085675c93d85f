use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::serde_json_adapter::{
    read_page_file, read_stream_file, read_stream_value, write_stream_file,
};
use crate::infrastructure::x_post_matcher::OriginXPostMatcher;
use crate::usecase::combine::{append_page, combine_stream};
use crate::usecase::event::AppEvent;
use crate::usecase::validate::validate_stream_json;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::XPostsCombine {
            input,
            output,
            append,
            emit_events,
            backup,
            dry_run,
        } => {
            if !dry_run && is_same_file(&input, &output) {
                if !backup {
                    return Err(anyhow!(
                        "refusing to overwrite input without --backup: {input}"
                    ));
                }
                create_timestamped_backup(Path::new(&input))
                    .with_context(|| format!("creating backup for: {input}"))?;
            }

            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };

            let dto = read_stream_file(&input)
                .await
                .with_context(|| format!("reading input stream JSON: {input}"))?;

            let matcher = OriginXPostMatcher;

            let (out, stats) = match append {
                Some(page_path) => {
                    let page = read_page_file(&page_path)
                        .await
                        .with_context(|| format!("reading page JSON: {page_path}"))?;
                    append_page(dto, page, &matcher, Some(tx)).await?
                }
                None => combine_stream(dto, &matcher, Some(tx)).await?,
            };

            let written = if dry_run {
                Ok(())
            } else {
                write_stream_file(&output, &out)
                    .await
                    .with_context(|| format!("writing output stream JSON: {output}"))
            };

            // The sender went away with the combine call; drain before reporting.
            if let Some(handle) = printer {
                handle.await.ok();
            }
            written?;

            eprintln!(
                "summary: items_seen={} items_emitted={} x_posts_folded={} duplicate_urls_missing={}",
                stats.items_seen,
                stats.items_emitted,
                stats.x_posts_folded,
                stats.duplicate_urls_missing
            );

            Ok(())
        }

        Cli::XPostsValidate { input } => {
            let raw = read_stream_value(&input)
                .await
                .with_context(|| format!("reading input stream JSON: {input}"))?;

            let matcher = OriginXPostMatcher;
            validate_stream_json(&raw, &matcher)
                .with_context(|| format!("validating stream: {input}"))?;

            eprintln!("schema validation passed");
            eprintln!("ok: invariants validated");
            Ok(())
        }
    }
}

#[derive(Debug)]
enum Cli {
    XPostsCombine {
        input: String,
        output: String,
        append: Option<String>,
        emit_events: bool,
        backup: bool,
        dry_run: bool,
    },
    XPostsValidate {
        input: String,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        if args[1] != "xposts" {
            return Err(anyhow!(usage()));
        }

        match args[2].as_str() {
            "combine" => Self::parse_combine(args),
            "validate" => Self::parse_validate(args),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_combine(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut output: Option<String> = None;
        let mut append: Option<String> = None;
        let mut emit_events = false;
        let mut backup = false;
        let mut dry_run = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "--append" => {
                    i += 1;
                    append = args.get(i).cloned();
                    if append.is_none() {
                        return Err(anyhow!(format!("missing value for --append\n\n{}", usage())));
                    }
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "--dry-run" => {
                    dry_run = true;
                }
                "--backup" => {
                    backup = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;
        let output = if dry_run {
            output.unwrap_or_default()
        } else {
            output.ok_or_else(|| anyhow!(format!("missing --out/--output\n\n{}", usage())))?
        };

        Ok(Cli::XPostsCombine {
            input,
            output,
            append,
            emit_events,
            backup,
            dry_run,
        })
    }

    fn parse_validate(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::XPostsValidate { input })
    }
}

fn usage() -> &'static str {
    "Usage:\n  xposts combine --in/--input <stream.json> --out/--output <out.json> [--append <page.json>] [--emit-events] [--backup] [--dry-run]\n  xposts validate --in/--input <stream.json>\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; summary goes to stderr.\n\nSafety:\n  If output path equals input path, --backup is required and a timestamped backup is created in the same directory."
}

fn is_same_file(a: &str, b: &str) -> bool {
    let a = std::fs::canonicalize(a).unwrap_or_else(|_| PathBuf::from(a));
    let b = std::fs::canonicalize(b).unwrap_or_else(|_| PathBuf::from(b));
    a == b
}

fn create_timestamped_backup(input: &Path) -> Result<PathBuf> {
    let file_name = input
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("input file name is not valid UTF-8"))?;

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();

    let backup_path = input.with_file_name(format!("{file_name}.bak.{ts}"));
    std::fs::copy(input, &backup_path).with_context(|| format!("copying {file_name} to backup"))?;
    Ok(backup_path)
}
