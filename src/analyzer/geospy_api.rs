//! GeoSpy API連携モジュール
//!
//! Base64エンコード済み画像を /predict にPOSTし、位置予測を受け取る。

use crate::config::Config;
use crate::error::{GeoSpyError, Result};
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;

use super::types::PredictionResponse;

const PREDICT_ENDPOINT: &str = "/predict";

/// /predict リクエストボディ
#[derive(Serialize)]
struct PredictRequest {
    inputs: PredictInputs,
    top_k: usize,
}

#[derive(Serialize)]
struct PredictInputs {
    image: String,
}

/// GeoSpy APIクライアント
///
/// 全リクエストで1つのコネクションプールを共有する。
/// タイムアウトはリクエスト全体に対して適用される。
#[derive(Clone)]
pub struct GeoSpyClient {
    client: reqwest::Client,
    predict_url: String,
    api_token: String,
    top_k: usize,
}

impl GeoSpyClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_token = config.get_api_token()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            predict_url: format!(
                "{}{}",
                config.api_base.trim_end_matches('/'),
                PREDICT_ENDPOINT
            ),
            api_token,
            top_k: config.top_k,
        })
    }

    /// 画像1枚の位置予測を取得
    pub async fn predict(&self, encoded_image: String) -> Result<PredictionResponse> {
        let body = PredictRequest {
            inputs: PredictInputs {
                image: encoded_image,
            },
            top_k: self.top_k,
        };

        let response = self
            .client
            .post(&self.predict_url)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let text = response.text().await.unwrap_or_default();
            return Err(GeoSpyError::ApiCall(format!("status {}: {}", status, text)));
        }

        response
            .json::<PredictionResponse>()
            .await
            .map_err(|e| GeoSpyError::ApiParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_request_serialize() {
        let request = PredictRequest {
            inputs: PredictInputs {
                image: "aGVsbG8=".to_string(),
            },
            top_k: 25,
        };

        let json = serde_json::to_string(&request).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"inputs":{"image":"aGVsbG8="},"top_k":25}"#);
    }

    #[test]
    fn test_predict_url_built_from_config() {
        let config = Config {
            api_token: Some("test-token".to_string()),
            api_base: "https://dev.geospy.ai/".to_string(),
            ..Config::default()
        };

        let client = GeoSpyClient::new(&config).unwrap();
        assert_eq!(client.predict_url, "https://dev.geospy.ai/predict");
    }
}
