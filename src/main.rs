use anyhow::Context;
use clap::Parser;
use csvmaker::{cli, config, server};
use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "csvmaker=debug"
    } else {
        "csvmaker=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Commands::Serve {
            port,
            save_dir,
            csv_output_dir,
        } => {
            let mut config = Config::load().context("設定の読み込みに失敗しました")?;
            if let Some(dir) = save_dir {
                config.save_dir = dir;
            }
            if let Some(dir) = csv_output_dir {
                config.csv_output_dir = dir;
            }
            config.validate().context("設定が不正です")?;

            server::serve(config, port)
                .await
                .context("サーバーの起動に失敗しました")?;
        }

        Commands::Config {
            set_save_dir,
            set_csv_output_dir,
            show,
        } => {
            let mut config = Config::load()?;

            if let Some(dir) = set_save_dir {
                config.set_save_dir(dir)?;
                println!("✔ 保存先を設定しました");
            }

            if let Some(dir) = set_csv_output_dir {
                config.set_csv_output_dir(dir)?;
                println!("✔ CSV出力先を設定しました");
            }

            if show {
                println!("設定:");
                println!("  保存先: {}", config.save_dir.display());
                println!("  CSV出力先: {}", config.csv_output_dir.display());
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
