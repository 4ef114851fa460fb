use candidate_search::{cli, client, config, error, pager, terminal};
use candidate_search_common::{
    CandidateId, ControlKind, FavoriteState, RowChange, SearchController, SearchSession,
    ToggleController, ToggleState,
};
use clap::Parser;
use cli::{Cli, Commands, FavoriteCommand};
use client::HttpBackend;
use config::Config;
use error::Result;
use std::cell::RefCell;
use terminal::{Spinner, TerminalNotifier};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;
    let base_url = cli.url.clone().unwrap_or_else(|| config.base_url());

    match cli.command {
        Commands::Search { query, page, interactive } => {
            let backend = HttpBackend::new(&base_url)?;
            let search = SearchController::new(
                &backend,
                RefCell::new(SearchSession::with_page_size(config.page_size)),
                Spinner::default(),
                TerminalNotifier,
            )
            .with_policy(config.policies.search);
            let toggles = ToggleController::new(&backend, RefCell::new(ToggleState::new()), TerminalNotifier)
                .with_policies(config.policies);

            let Some(count) = pager::run_search(&search, &query.join(" ")).await else {
                std::process::exit(1);
            };
            println!("🔎 {}名の候補者が見つかりました\n", count);

            for _ in 1..page {
                if !search.go_to_next_page() {
                    break;
                }
            }

            if interactive {
                pager::run_interactive(&search, &toggles, &backend).await?;
            } else {
                pager::print_page(&search, &toggles, &backend);
            }
        }

        Commands::Favorite { action } => {
            let backend = HttpBackend::new(&base_url)?;
            let toggles = ToggleController::new(&backend, RefCell::new(ToggleState::new()), TerminalNotifier)
                .with_policies(config.policies);

            let change = match action {
                FavoriteCommand::Add { id } => {
                    let id = CandidateId::from(id);
                    toggles.register(id.clone(), ControlKind::ProfileButton, FavoriteState::Neutral);
                    toggles.add_favorite(&id).await?
                }
                FavoriteCommand::Remove { id } => {
                    let id = CandidateId::from(id);
                    toggles.register(id.clone(), ControlKind::ProfileButton, FavoriteState::Favorited);
                    toggles.remove_favorite(&id).await?
                }
                FavoriteCommand::Toggle { id, favorited } => {
                    let id = CandidateId::from(id);
                    toggles.register(id.clone(), ControlKind::ProfileButton, FavoriteState::from_flag(favorited));
                    toggles.toggle_favorite(&id).await?
                }
            };

            match change {
                RowChange::Favorited => println!("✔ お気に入りに追加しました"),
                RowChange::Unfavorited | RowChange::Removed => println!("✔ お気に入りから外しました"),
                RowChange::Unchanged | RowChange::Skipped => println!("変更はありません"),
            }
        }

        Commands::Config { set_url, show } => {
            let mut config = config;

            if let Some(url) = set_url {
                config.set_base_url(&url)?;
                config.save()?;
                println!("✔ 接続先を設定しました: {}", config.base_url);
            }

            if show {
                println!("設定:");
                println!("  接続先: {}", config.base_url());
                println!("  ページあたり件数: {}", config.page_size);
                println!("  失敗時の通知: {}", serde_json::to_string(&config.policies)?);
            }
        }
    }

    Ok(())
}
