use std::ffi::OsString;
use std::fs;
use std::process::ExitCode;

use urlclean_lib::cleaner::{clean, clean_batch};

#[test]
fn integration_clean_batch() {
    let urls = [
        "https://example.com/product?id=123&utm_source=facebook&utm_medium=social&ref=share",
        "https://example.com/?id=123&page=2",
        "not a url",
    ];
    let cleaned = clean_batch(&urls);
    assert_eq!(
        cleaned,
        vec![
            "https://example.com/product?id=123",
            "https://example.com/?id=123&page=2",
            "not a url",
        ]
    );
    for (u, c) in urls.iter().zip(&cleaned) {
        assert_eq!(&clean(u), c);
        assert_eq!(&clean(c), c);
    }
}

#[test]
fn integration_clean_file_to_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("urls.txt");
    let output = dir.path().join("cleaned.txt");
    fs::write(
        &input,
        "https://news.example/story?fbclid=abc&page=3\n\nhttps://shop.example/?tag=x\n",
    )
    .expect("write input");

    let args: Vec<OsString> = vec![
        "urlclean".into(),
        "clean".into(),
        "--file".into(),
        input.into_os_string(),
        "--output".into(),
        output.clone().into_os_string(),
    ];
    let code = urlclean_lib::run_from(args);
    assert_eq!(code, ExitCode::SUCCESS);

    let written = fs::read_to_string(&output).expect("read output");
    assert_eq!(
        written,
        "https://news.example/story?page=3\nhttps://shop.example/\n"
    );
}

#[test]
fn integration_missing_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.txt");
    let args: Vec<OsString> = vec![
        "urlclean".into(),
        "clean".into(),
        "-f".into(),
        missing.into_os_string(),
    ];
    let code = urlclean_lib::run_from(args);
    assert_eq!(code, ExitCode::FAILURE);
}

#[test]
fn integration_tab_with_clean_url_succeeds_without_clipboard() {
    let args: Vec<OsString> = vec![
        "urlclean".into(),
        "tab".into(),
        "https://example.com/?id=1".into(),
    ];
    assert_eq!(urlclean_lib::run_from(args), ExitCode::SUCCESS);
}
