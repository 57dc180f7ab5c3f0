//! 画像ファイル選択モジュール
//!
//! ネイティブのファイル選択ダイアログで画像を選ばせる。
//! キャンセル時は空のVecを返す。

use std::path::PathBuf;

pub fn pick_images() -> Vec<PathBuf> {
    rfd::FileDialog::new()
        .set_title("画像ファイルを選択")
        .add_filter("Image files", &["jpg", "jpeg", "png"])
        .pick_files()
        .unwrap_or_default()
}
