use clap::Parser;
use season_art_common::{
    prepare_run, prompt_for, read_names_from_path, BatchRunner, GenerationMode, Generator,
    RunStatus, SelectionState, StopFlag,
};
use season_art_rust::{cli, config, error, hf_client, progress, selector};
use cli::{Cli, Commands};
use config::Config;
use error::{Result, SeasonArtError};
use hf_client::{HfInferenceClient, TokioSleeper};
use progress::TerminalObserver;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Generate {
            spreadsheet,
            output,
            mode,
            selections,
            interactive,
            token,
            base_delay,
            model,
        } => {
            println!("🎨 season-art - 季節画像生成\n");

            let mut config = config;
            if let Some(secs) = base_delay {
                config.base_delay_secs = secs;
            }
            if let Some(model) = model {
                config.model = model;
            }
            let token = config.api_token(token.as_deref())?;

            // 1. 名前リスト
            println!("[1/3] 名前リストを読み込み中...");
            if !spreadsheet.exists() {
                return Err(SeasonArtError::FileNotFound(spreadsheet.display().to_string()));
            }
            let names = read_names_from_path(&spreadsheet)?;
            println!("✔ {}件の名前を読み込み\n", names.len());

            let mut selection = SelectionState::new(names.clone());
            if mode == GenerationMode::Custom {
                selector::apply_selections(&mut selection, &selections);
                if interactive {
                    selector::select_interactive(&mut selection)?;
                }
            }
            let plan = prepare_run(&token, mode, &names, &selection)?;

            // 2. 生成
            println!(
                "[2/3] {}枚の画像を生成中... (モデル: {}, Ctrl-Cで停止)",
                plan.len(),
                config.model
            );
            let client = HfInferenceClient::new(&config, token.trim())?;
            let sleeper = TokioSleeper;
            let generator = Generator::new(&client, &sleeper)
                .with_model(config.model.clone())
                .with_policy(config.retry_policy());
            let stop = StopFlag::new();
            let runner = BatchRunner::new(generator, stop.clone());

            // 1回目は停止要求、2回目で即終了
            let signal_stop = stop.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    signal_stop.request_stop();
                    eprintln!("\n現在の画像が終わり次第停止します（もう一度 Ctrl-C で強制終了）");
                }
                if tokio::signal::ctrl_c().await.is_ok() {
                    std::process::exit(130);
                }
            });

            let mut observer = TerminalObserver::new(plan.len(), &output);
            let outcome = runner.run(&plan, &mut observer).await;
            observer.finish(match outcome.status {
                RunStatus::Completed => "Generation complete",
                RunStatus::Stopped => "Generation stopped by user",
                RunStatus::Aborted => "Generation aborted",
            });

            // 3. 結果
            println!("\n[3/3] 結果");
            println!(
                "  生成: {}枚 / 失敗: {}枚 / 全{}枚 ({:.0}%)",
                outcome.progress.completed,
                outcome.progress.failed,
                outcome.progress.total,
                outcome.progress.percent()
            );
            println!("  出力先: {}", output.display());
            if !outcome.errors.is_empty() {
                println!("\nエラー ({}件):", outcome.errors.len());
                for entry in outcome.errors.entries() {
                    println!("  - {}", entry);
                }
            }

            match outcome.status {
                RunStatus::Completed => println!("\n✅ 完了"),
                RunStatus::Stopped => println!("\n⏹ 停止しました"),
                RunStatus::Aborted => {
                    let reason = outcome.errors.entries().last().cloned().unwrap_or_default();
                    return Err(SeasonArtError::Aborted(reason));
                }
            }
        }

        Commands::Names { spreadsheet } => {
            if !spreadsheet.exists() {
                return Err(SeasonArtError::FileNotFound(spreadsheet.display().to_string()));
            }
            let names = read_names_from_path(&spreadsheet)?;
            println!("名前リスト ({}件):", names.len());
            for (i, name) in names.iter().enumerate() {
                println!("  {:>3}) {}", i + 1, name);
            }
        }

        Commands::Prompt { name, month } => {
            println!("{}", prompt_for(name.trim(), month));
        }

        Commands::Config { show } => {
            if show {
                println!("設定:");
                println!("  APIトークン: {}", config.masked_token());
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("`season-art config --show` で現在の設定を表示します");
            }
        }
    }

    Ok(())
}
