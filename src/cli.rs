use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kaihan-gallery")]
#[command(about = "凯晗书画作品集 数据生成工具", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像フォルダから作品データ(JSON)を生成
    Generate {
        /// 画像フォルダ（省略時は設定値）
        #[arg(short, long)]
        images: Option<PathBuf>,

        /// 出力JSON（省略時は設定値）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 作品データの集計を表示
    Report {
        /// 作品データJSON
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 対話的に作品タイトルを付ける
    Titles {
        /// 作品データJSON
        #[arg(required = true)]
        input: PathBuf,

        /// 出力先（省略時は上書き）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// タイトル設定済みの作品も対象にする
        #[arg(long)]
        all: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 画像フォルダを設定
        #[arg(long)]
        set_images_dir: Option<PathBuf>,

        /// 出力JSONを設定
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
