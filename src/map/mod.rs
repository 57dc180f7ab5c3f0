//! マップHTML生成モジュール
//!
//! 位置予測をLeafletマップ上のマーカーとして描画し、
//! 画像ごとに `<画像パス>_map.html` へ書き出す。

mod template;

use crate::analyzer::PredictionResponse;
use crate::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// マーカー色パレット（予測インデックス順に循環）
pub const MARKER_COLORS: [&str; 18] = [
    "#d63e2a", // red
    "#38aadd", // blue
    "#72b026", // green
    "#f69730", // orange
    "#d252b9", // purple
    "#ff8ee9", // pink
    "#575757", // gray
    "#303030", // black
    "#0067a3", // darkblue
    "#728224", // darkgreen
    "#8adaff", // lightblue
    "#bbf970", // lightgreen
    "#ff8e7f", // lightred
    "#a23336", // darkred
    "#5b396b", // darkpurple
    "#436978", // cadetblue
    "#a3a3a3", // lightgray
    "#ffcb92", // beige
];

/// 初期表示の中心座標とズームレベル
const MAP_CENTER: [f64; 2] = [0.0, 0.0];
const MAP_ZOOM: u32 = 2;

/// テンプレートに埋め込むマーカー1件分
#[derive(Debug, Serialize)]
struct MapMarker {
    lat: f64,
    lng: f64,
    color: &'static str,
    popup: String,
}

/// 1枚分の予測をマップHTMLとして書き出す
///
/// 予測が空の場合は警告を出してファイルを作らず `None` を返す。
/// 書き出したファイルのパスを返す。既存ファイルは上書きする。
pub fn render_map(image_path: &Path, response: &PredictionResponse) -> Result<Option<PathBuf>> {
    let predictions = &response.geo_predictions;
    if predictions.is_empty() {
        println!("⚠ 位置予測が空のためマップを生成しません: {}", image_path.display());
        return Ok(None);
    }

    let markers: Vec<MapMarker> = predictions
        .iter()
        .enumerate()
        .map(|(i, prediction)| MapMarker {
            lat: prediction.coordinates[0],
            lng: prediction.coordinates[1],
            color: MARKER_COLORS[i % MARKER_COLORS.len()],
            popup: format!(
                "Image: {}<br>Score: {}<br>Similarity Score 1km: {}",
                image_path.display(),
                prediction.score,
                prediction.similarity_score_1km
            ),
        })
        .collect();

    let html = build_map_html(&markers)?;
    let output_path = output_path_for(image_path);
    std::fs::write(&output_path, html)?;

    Ok(Some(output_path))
}

/// 出力先は元画像パスに `_map.html` を付けたもの
pub fn output_path_for(image_path: &Path) -> PathBuf {
    PathBuf::from(format!("{}_map.html", image_path.display()))
}

fn build_map_html(markers: &[MapMarker]) -> Result<String> {
    let marker_json = serde_json::to_string(markers)?;
    let center = format!("[{}, {}]", MAP_CENTER[0], MAP_CENTER[1]);

    Ok(template::MAP_HTML
        .replace("__MARKERS__", &marker_json)
        .replace("__CENTER__", &center)
        .replace("__ZOOM__", &MAP_ZOOM.to_string()))
}
