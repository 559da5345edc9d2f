use clap::{Parser, Subcommand};
use season_art_common::{GenerationMode, Month};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "season-art")]
#[command(about = "名前入り季節画像の一括生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 名前リストから月ごとの画像を生成
    Generate {
        /// 名前リストのExcelファイル（"Names" 列）
        #[arg(required = true)]
        spreadsheet: PathBuf,

        /// 出力フォルダ
        #[arg(short, long, default_value = "season-art-output")]
        output: PathBuf,

        /// 生成モード (all/custom)
        #[arg(short, long, default_value = "all")]
        mode: GenerationMode,

        /// カスタム選択（例: "Alice=March,April"）。複数指定可
        #[arg(short, long = "select", value_parser = parse_selection)]
        selections: Vec<(String, Vec<Month>)>,

        /// 対話式で名前と月を選択（customモード）
        #[arg(short, long)]
        interactive: bool,

        /// APIトークン（省略時は環境変数 HF_TOKEN）
        #[arg(long)]
        token: Option<String>,

        /// 基本待機秒数（項目間の待機・バックオフの基準）
        #[arg(long)]
        base_delay: Option<u64>,

        /// モデルID
        #[arg(long)]
        model: Option<String>,
    },

    /// Excelから読み込んだ名前を表示
    Names {
        #[arg(required = true)]
        spreadsheet: PathBuf,
    },

    /// 送信されるプロンプトを表示
    Prompt {
        name: String,

        month: Month,
    },

    /// 現在の設定を表示
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// "NAME=MONTH,MONTH" 形式のカスタム選択を解釈
pub fn parse_selection(s: &str) -> Result<(String, Vec<Month>), String> {
    let (name, months) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid selection: {}. Use NAME=MONTH,MONTH", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("Invalid selection: {}. Name is empty", s));
    }
    let months = months
        .split(',')
        .filter(|m| !m.trim().is_empty())
        .map(|m| m.parse::<Month>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((name.to_string(), months))
}
