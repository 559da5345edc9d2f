//! 名前リスト読み込みから保存までの統合テスト

use rust_xlsxwriter::Workbook;
use season_art_common::{
    prepare_run, read_names_from_path, Error, GenerationMode, Month, SelectionState,
};
use season_art_rust::error::SeasonArtError;
use season_art_rust::output::{ensure_png, save_image};
use season_art_rust::selector::apply_selections;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

fn write_workbook(path: &Path, header: &str, cells: &[&str]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, header).unwrap();
    for (i, cell) in cells.iter().enumerate() {
        sheet.write_string(i as u32 + 1, 0, *cell).unwrap();
    }
    workbook.save(path).unwrap();
}

#[test]
fn test_read_names_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("names.xlsx");
    write_workbook(&path, "Names", &["Alice", " Bob ", "", "Alice"]);

    let names = read_names_from_path(&path).unwrap();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[test]
fn test_missing_names_column() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("people.xlsx");
    write_workbook(&path, "Person", &["Alice"]);

    let err = read_names_from_path(&path).unwrap_err();
    assert!(matches!(err, Error::Spreadsheet(_)));
    assert!(err.to_string().starts_with("Excel file error:"));
}

#[test]
fn test_nonexistent_file() {
    let result = read_names_from_path(Path::new("/nonexistent/path/names.xlsx"));
    assert!(matches!(result, Err(Error::Spreadsheet(_))));
}

#[test]
fn test_custom_plan_from_cli_selections() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("names.xlsx");
    write_workbook(&path, "Names", &["Alice", "Bob", "Carol"]);
    let names = read_names_from_path(&path).unwrap();

    let mut selection = SelectionState::new(names.clone());
    apply_selections(
        &mut selection,
        &[
            ("Carol".to_string(), vec![Month::December]),
            ("Alice".to_string(), vec![]),
            ("Bob".to_string(), vec![Month::May, Month::January]),
        ],
    );

    let plan = prepare_run("hf_testtoken", GenerationMode::Custom, &names, &selection).unwrap();
    let items: Vec<String> = plan.items().iter().map(|i| i.to_string()).collect();
    assert_eq!(items, vec!["Carol - December", "Bob - May", "Bob - January"]);
}

#[test]
fn test_prepare_run_errors() {
    let names = vec!["Alice".to_string()];
    let selection = SelectionState::new(names.clone());

    let err = prepare_run("", GenerationMode::All, &names, &selection).unwrap_err();
    assert_eq!(err.to_string(), "API token is required");

    let err = prepare_run("short", GenerationMode::All, &names, &selection).unwrap_err();
    assert_eq!(err.to_string(), "Invalid API token format");

    let err = prepare_run("hf_testtoken", GenerationMode::Custom, &names, &selection).unwrap_err();
    assert_eq!(err.to_string(), "Please select at least one name and month");

    let err = prepare_run("hf_testtoken", GenerationMode::All, &[], &selection).unwrap_err();
    assert_eq!(err.to_string(), "Please provide an Excel file with valid names");
}

#[test]
fn test_common_error_converts() {
    let err: SeasonArtError = Error::EmptySelection.into();
    assert!(matches!(err, SeasonArtError::Common(Error::EmptySelection)));
    assert_eq!(err.to_string(), "Please select at least one name and month");
}

#[test]
fn test_save_converts_jpeg_to_png() {
    let img = image::RgbImage::from_pixel(4, 4, image::Rgb([10, 20, 30]));
    let mut jpeg = Cursor::new(Vec::new());
    img.write_to(&mut jpeg, image::ImageFormat::Jpeg).unwrap();
    let jpeg = jpeg.into_inner();

    let png = ensure_png(&jpeg).unwrap();
    assert_eq!(image::guess_format(&png).unwrap(), image::ImageFormat::Png);

    let dir = tempdir().expect("Failed to create temp dir");
    let out = dir.path().join("nested");
    let path = save_image(&out, "Alice", Month::October, &jpeg).unwrap();
    assert_eq!(path, out.join("Alice_October.png"));
    let written = std::fs::read(&path).unwrap();
    assert_eq!(image::guess_format(&written).unwrap(), image::ImageFormat::Png);
}

#[test]
fn test_save_rejects_non_image() {
    let dir = tempdir().expect("Failed to create temp dir");
    let err = save_image(dir.path(), "Alice", Month::May, b"{\"error\":\"oops\"}").unwrap_err();
    assert!(matches!(err, SeasonArtError::ImageEncode(_)));
}
