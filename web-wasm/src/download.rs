//! 画像のダウンロード（アンカー要素のクリック）

use season_art_common::{image_file_name, Month};
use wasm_bindgen::prelude::*;
use web_sys::HtmlAnchorElement;

/// (URL, ファイル名) の一覧
pub fn download_targets(name: &str, months: &[(Month, String)]) -> Vec<(String, String)> {
    months
        .iter()
        .map(|(month, url)| (url.clone(), image_file_name(name, *month)))
        .collect()
}

pub fn download_url(url: &str, file_name: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}

/// 1人分をまとめてダウンロード
pub fn download_all(name: &str, months: &[(Month, String)]) -> Result<usize, JsValue> {
    let targets = download_targets(name, months);
    for (url, file_name) in &targets {
        download_url(url, file_name)?;
    }
    Ok(targets.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_targets() {
        let months = vec![
            (Month::April, "blob:a".to_string()),
            (Month::January, "blob:b".to_string()),
        ];
        assert_eq!(
            download_targets("Alice", &months),
            vec![
                ("blob:a".to_string(), "Alice_April.png".to_string()),
                ("blob:b".to_string(), "Alice_January.png".to_string()),
            ]
        );
    }
}
