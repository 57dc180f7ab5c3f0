//! 位置推定ディスパッチモジュール
//!
//! 画像を1枚ずつエンコードして送信タスクとして起動し、
//! 全タスクの完了を待ってから成功分だけを集めて返す。
//! 送信失敗はログに出すのみでバッチ全体は止めない。

mod geospy_api;
mod types;

pub use geospy_api::GeoSpyClient;
pub use types::{GeoPrediction, LocatedImage, PredictionResponse};

use crate::encoder;
use crate::scanner::ImageInfo;
use std::time::Duration;
use tokio::task::JoinHandle;

/// 画像群の位置推定を一括実行
///
/// 起動間隔 `submit_interval` を空けつつ全画像分のタスクを起動し、
/// 完了を待って成功した分の結果を返す。完了順は保証しない。
pub async fn locate_images(
    images: &[ImageInfo],
    client: &GeoSpyClient,
    submit_interval: Duration,
    verbose: bool,
) -> Vec<LocatedImage> {
    let mut handles: Vec<JoinHandle<Option<LocatedImage>>> = Vec::new();

    for (idx, image) in images.iter().enumerate() {
        // 読み込めない画像はその1枚だけスキップ
        let encoded = match encoder::encode_image(&image.path) {
            Ok(encoded) => encoded,
            Err(e) => {
                eprintln!("✗ {}", e);
                continue;
            }
        };

        if verbose {
            println!("  送信 {}/{}: {}", idx + 1, images.len(), image.file_name);
        }

        let client = client.clone();
        let path = image.path.clone();

        handles.push(tokio::spawn(async move {
            match client.predict(encoded).await {
                Ok(response) => Some(LocatedImage { path, response }),
                Err(e) => {
                    eprintln!("✗ {}: {}", path.display(), e);
                    None
                }
            }
        }));

        // 送信間隔を空ける（最後の1枚の後は待たない）
        if idx + 1 < images.len() && !submit_interval.is_zero() {
            tokio::time::sleep(submit_interval).await;
        }
    }

    let mut results = Vec::new();
    for handle in handles {
        match handle.await {
            Ok(Some(located)) => results.push(located),
            Ok(None) => {}
            Err(e) => eprintln!("✗ 送信タスクの実行に失敗: {}", e),
        }
    }

    results
}
