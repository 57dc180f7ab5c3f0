use clap::Parser;
use geospy_rust::{analyzer, cli, config, error, map, scanner, selector};

use analyzer::GeoSpyClient;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use scanner::ImageInfo;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Locate { paths, folder, interval_ms, top_k } => {
            println!("📍 geospy-rust - 画像ジオロケーション推定\n");

            let mut config = config;
            if let Some(ms) = interval_ms {
                config.submit_interval_ms = ms;
            }
            if let Some(k) = top_k {
                config.top_k = k;
            }

            // 1. 画像選択
            println!("[1/3] 画像を選択中...");
            let images: Vec<ImageInfo> = if let Some(folder) = folder {
                scanner::scan_folder(&folder)?
            } else if !paths.is_empty() {
                paths.into_iter().map(ImageInfo::from_path).collect()
            } else {
                selector::pick_images()
                    .into_iter()
                    .map(ImageInfo::from_path)
                    .collect()
            };

            if images.is_empty() {
                println!("画像が選択されていません");
                return Ok(());
            }
            println!("✔ {}枚の画像を選択\n", images.len());

            // 2. 位置推定
            println!("[2/3] 位置推定中...");
            let client = GeoSpyClient::new(&config)?;
            let interval = Duration::from_millis(config.submit_interval_ms);
            let results = analyzer::locate_images(&images, &client, interval, cli.verbose).await;
            println!("✔ {}/{}枚の推定に成功\n", results.len(), images.len());

            // 3. マップ生成
            println!("[3/3] マップを生成中...");
            let mut generated = 0usize;
            for located in &results {
                match map::render_map(&located.path, &located.response) {
                    Ok(Some(output)) => {
                        generated += 1;
                        if cli.verbose {
                            println!("  マップ出力: {}", output.display());
                        }
                    }
                    Ok(None) => {}
                    Err(e) => eprintln!("✗ マップ生成エラー ({}): {}", located.path.display(), e),
                }
            }
            println!("✔ {}件のマップを出力", generated);

            println!("\n✅ 完了");
        }

        Commands::Config { set_api_token, set_api_base, show } => {
            let mut config = config;

            if let Some(token) = set_api_token {
                config.set_api_token(token)?;
                println!("✔ APIトークンを設定しました");
            }

            if let Some(api_base) = set_api_base {
                config.set_api_base(api_base)?;
                println!("✔ APIベースURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  APIベースURL: {}", config.api_base);
                println!("  top_k: {}", config.top_k);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  送信間隔: {}ms", config.submit_interval_ms);
                println!(
                    "  APIトークン: {}",
                    if config.api_token.is_some() { "設定済み" } else { "未設定" }
                );
            }
        }
    }

    Ok(())
}
