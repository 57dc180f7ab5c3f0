use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// /predict レスポンス
///
/// `geo_predictions` が欠けていても空リストとして扱う
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub geo_predictions: Vec<GeoPrediction>,
}

/// 1件の位置予測
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoPrediction {
    /// 緯度・経度
    pub coordinates: [f64; 2],

    /// スコア
    #[serde(default)]
    pub score: f64,

    /// 1km圏内の類似度スコア
    #[serde(default)]
    pub similarity_score_1km: f64,
}

/// 推定に成功した1枚分の結果（元画像パスとレスポンスの組）
#[derive(Debug, Clone)]
pub struct LocatedImage {
    pub path: PathBuf,
    pub response: PredictionResponse,
}
