use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "candidate-search")]
#[command(about = "候補者検索クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 接続先URL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 条件に合う候補者を検索
    Search {
        /// 理想の候補者の条件（自由記述）
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// 表示するページ
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// 対話式ページャで開く
        #[arg(short, long)]
        interactive: bool,
    },

    /// お気に入りの追加・解除・切替
    Favorite {
        #[command(subcommand)]
        action: FavoriteCommand,
    },

    /// 設定の表示・変更
    Config {
        /// 接続先URLを保存
        #[arg(long)]
        set_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum FavoriteCommand {
    /// お気に入りに追加
    Add {
        /// 候補者ID
        id: String,
    },

    /// お気に入りから外す
    Remove {
        /// 候補者ID
        id: String,
    },

    /// 現在の状態に応じて追加/解除
    Toggle {
        /// 候補者ID
        id: String,

        /// 現在お気に入り登録済み
        #[arg(long)]
        favorited: bool,
    },
}
