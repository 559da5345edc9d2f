//! 生成画像の保存
//!
//! `<名前>_<月>.png` として出力フォルダに書き出す。PNG以外が返ってきた場合は変換する。

use crate::error::Result;
use image::ImageFormat;
use season_art_common::{image_file_name, Month};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// ファイル名に使えない文字を置き換える
pub fn sanitize_file_stem(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "_".to_string()
    } else {
        cleaned
    }
}

pub fn output_path(dir: &Path, name: &str, month: Month) -> PathBuf {
    dir.join(image_file_name(&sanitize_file_stem(name), month))
}

/// PNGバイト列に揃える
pub fn ensure_png(bytes: &[u8]) -> Result<Vec<u8>> {
    if matches!(image::guess_format(bytes), Ok(ImageFormat::Png)) {
        return Ok(bytes.to_vec());
    }
    let decoded = image::load_from_memory(bytes)?;
    let mut png = Cursor::new(Vec::new());
    decoded.write_to(&mut png, ImageFormat::Png)?;
    Ok(png.into_inner())
}

/// 画像を保存して保存先を返す
pub fn save_image(dir: &Path, name: &str, month: Month, bytes: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = output_path(dir, name, month);
    let png = ensure_png(bytes)?;
    std::fs::write(&path, png)?;
    Ok(path)
}
