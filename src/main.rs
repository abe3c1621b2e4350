use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use wxapkg_scan::{cli, config, enricher, handoff, logging, lookup, roots, scan, scanner, selector};
use cli::{Cli, Commands};
use config::Config;
use wxapkg_scan::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Scan { root, output_base, offline, sequential } => {
            println!("📦 wxapkg-scan - 小程序スキャン\n");
            let config = Config::load_or_default();

            let metadata: Box<dyn lookup::MetadataLookup> = if offline {
                Box::new(lookup::OfflineLookup)
            } else if config.lookup_url.is_empty() {
                tracing::warn!("lookup_url が未設定のため照会しません");
                Box::new(lookup::OfflineLookup)
            } else {
                Box::new(lookup::HttpLookup::new(
                    config.lookup_url.clone(),
                    Duration::from_secs(config.lookup_timeout_seconds),
                )?)
            };

            let extractor =
                handoff::CommandExtractor::new(config.extractor.clone(), config.extractor_args.clone());
            let ui = selector::DialoguerUi::default();

            let options = scan::ScanOptions {
                root,
                output_base,
                lookup_mode: if sequential {
                    enricher::LookupMode::Sequential
                } else {
                    enricher::LookupMode::Parallel
                },
            };
            let deps = scan::Collaborators {
                lister: &scanner::FsLister,
                lookup: metadata.as_ref(),
                ui: &ui,
                extractor: &extractor,
            };

            let progress = ProgressBar::new(0);
            if let Ok(style) = ProgressStyle::default_bar().template("  {bar:30} {pos}/{len}") {
                progress.set_style(style);
            }

            match scan::run_scan(&options, &roots::home_base(), &deps, &progress)? {
                handoff::HandoffOutcome::Cancelled => {
                    println!("選択を中断しました");
                }
                handoff::HandoffOutcome::Completed { detail_path, extraction_error } => {
                    if let Some(e) = extraction_error {
                        println!("⚠ 展開に失敗しました: {}", e);
                    }
                    println!("✔ 詳細を保存: {}", detail_path.display());
                    println!("\n✅ 完了");
                }
            }
        }

        Commands::Roots { root } => {
            for (i, path) in roots::resolve_roots(root.as_deref(), &roots::home_base())
                .iter()
                .enumerate()
            {
                let mark = if path.is_dir() { "✔" } else { " " };
                println!("{} {}) {}", mark, i + 1, path.display());
            }
        }

        Commands::Config { set_lookup_url, set_extractor, show } => {
            let mut config = Config::load()?;

            if let Some(url) = set_lookup_url {
                config.set_lookup_url(url)?;
                println!("✔ 照会URLを設定しました");
            }

            if let Some(program) = set_extractor {
                config.set_extractor(program)?;
                println!("✔ 展開コマンドを設定しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  照会URL: {}",
                    if config.lookup_url.is_empty() { "未設定" } else { config.lookup_url.as_str() }
                );
                println!("  照会タイムアウト: {}秒", config.lookup_timeout_seconds);
                println!("  展開コマンド: {} {}", config.extractor, config.extractor_args.join(" "));
            }
        }
    }

    Ok(())
}
