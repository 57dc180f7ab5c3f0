use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "geospy")]
#[command(about = "画像ジオロケーション推定・マップ生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像の撮影地点を推定してマップHTMLを生成
    Locate {
        /// 画像ファイルのパス（省略時はファイル選択ダイアログを開く）
        paths: Vec<PathBuf>,

        /// フォルダ直下の画像を一括処理
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// リクエスト送信間隔（ミリ秒）
        #[arg(long)]
        interval_ms: Option<u64>,

        /// 予測候補数
        #[arg(long)]
        top_k: Option<usize>,
    },

    /// 設定を表示/編集
    Config {
        /// APIトークンを設定
        #[arg(long)]
        set_api_token: Option<String>,

        /// APIベースURLを設定
        #[arg(long)]
        set_api_base: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
