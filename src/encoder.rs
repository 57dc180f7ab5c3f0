//! 画像Base64エンコードモジュール

use crate::error::{GeoSpyError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::Path;

/// 画像ファイルを読み込んでBase64文字列に変換
pub fn encode_image(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| GeoSpyError::ImageRead(format!("{}: {}", path.display(), e)))?;
    Ok(STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_encode_roundtrip() {
        let temp_dir = std::env::temp_dir().join("geospy-test-encode");
        std::fs::create_dir_all(&temp_dir).unwrap();

        let path = temp_dir.join("sample.jpg");
        let original: Vec<u8> = (0u8..=255).collect();
        File::create(&path).unwrap().write_all(&original).unwrap();

        let encoded = encode_image(&path).unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, original);

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_encode_empty_file() {
        let temp_dir = std::env::temp_dir().join("geospy-test-encode-empty");
        std::fs::create_dir_all(&temp_dir).unwrap();

        let path = temp_dir.join("empty.png");
        File::create(&path).unwrap();

        let encoded = encode_image(&path).unwrap();
        assert!(encoded.is_empty());

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_encode_missing_file() {
        let result = encode_image(Path::new("/nonexistent/missing.jpg"));
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(matches!(err, GeoSpyError::ImageRead(_)));
        assert!(format!("{}", err).contains("missing.jpg"));
    }
}
