//! 名前リスト読み込み
//!
//! 先頭シートの1行目をヘッダーとみなし、"Names" 列の値を名前として取り出す。
//! 空セル・0・false などの偽値は除外する。

use crate::error::{Error, Result};

/// 名前列のヘッダー
pub const NAMES_COLUMN: &str = "Names";

/// ヘッダー行つきの行データから名前を抽出
///
/// * 前後の空白は除去
/// * 空文字は除外
/// * 重複は最初の1件のみ残す
pub fn extract_names<I, R>(rows: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[String]>,
{
    let mut rows = rows.into_iter();
    let header = rows
        .next()
        .ok_or_else(|| Error::Spreadsheet("Worksheet is empty".into()))?;
    let column = header
        .as_ref()
        .iter()
        .position(|h| h.trim() == NAMES_COLUMN)
        .ok_or_else(|| Error::Spreadsheet(format!("Column \"{}\" not found", NAMES_COLUMN)))?;

    let mut names: Vec<String> = Vec::new();
    for row in rows {
        let Some(cell) = row.as_ref().get(column) else {
            continue;
        };
        let name = cell.trim();
        if name.is_empty() || names.iter().any(|n| n == name) {
            continue;
        }
        names.push(name.to_string());
    }

    if names.is_empty() {
        return Err(Error::Spreadsheet("No valid names found in the Excel file".into()));
    }
    Ok(names)
}

#[cfg(feature = "xlsx")]
mod workbook {
    use super::extract_names;
    use crate::error::{Error, Result};
    use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
    use std::io::{Cursor, Read, Seek};
    use std::path::Path;

    /// バイト列（ブラウザのアップロード等）から名前を読み込む
    pub fn read_names_from_bytes(bytes: &[u8]) -> Result<Vec<String>> {
        let workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| Error::Spreadsheet(e.to_string()))?;
        read_first_sheet(workbook)
    }

    /// ファイルパスから名前を読み込む
    pub fn read_names_from_path(path: &Path) -> Result<Vec<String>> {
        let workbook = open_workbook_auto(path).map_err(|e| Error::Spreadsheet(e.to_string()))?;
        read_first_sheet(workbook)
    }

    fn read_first_sheet<RS: Read + Seek>(mut workbook: Sheets<RS>) -> Result<Vec<String>> {
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| Error::Spreadsheet("Workbook has no worksheets".into()))?
            .map_err(|e| Error::Spreadsheet(e.to_string()))?;
        names_from_range(&range)
    }

    fn names_from_range(range: &Range<Data>) -> Result<Vec<String>> {
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(cell_text).collect())
            .collect();
        extract_names(rows)
    }

    /// セル値を文字列化（偽値は空文字）
    fn cell_text(cell: &Data) -> String {
        match cell {
            Data::String(s) => s.clone(),
            Data::Int(0) => String::new(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) if *f == 0.0 || f.is_nan() => String::new(),
            Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
            Data::Float(f) => f.to_string(),
            Data::Bool(true) => "true".to_string(),
            Data::Bool(false) | Data::Empty | Data::Error(_) => String::new(),
            other => other.to_string(),
        }
    }

}

#[cfg(feature = "xlsx")]
pub use workbook::{read_names_from_bytes, read_names_from_path};
