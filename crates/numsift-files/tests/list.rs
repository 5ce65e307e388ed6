use numsift_core::{normalize, RegionCode};
use numsift_files::{read_number_list, read_rows, render_number_list, write_number_list};
use std::fs;
use tempfile::TempDir;

#[test]
fn write_then_reclean_keeps_order_and_values() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("out").join("cleaned.txt");
    let region = RegionCode::new("ZA").expect("region");

    let run = normalize(["082 555 1234", "079 361 2279", "0825551234"], Some(&region))
        .expect("normalize");
    write_number_list(&path, &run.accepted).expect("write list");

    let written = fs::read_to_string(&path).expect("read list");
    assert_eq!(written, "+27825551234\n+27793612279\n");

    let rows = read_number_list(&path).expect("read rows");
    let again = normalize(&rows, Some(&region)).expect("normalize again");
    assert_eq!(again.accepted, run.accepted);
    assert!(again.rejected.is_empty());
}

#[test]
fn render_empty_list_is_empty() {
    assert_eq!(render_number_list(&[]), "");
}

#[test]
fn read_rows_from_csv_and_txt() {
    let temp = TempDir::new().expect("temp dir");
    let csv = temp.path().join("contacts.csv");
    fs::write(&csv, "\u{feff}Ada,082 555 1234\nGrace,\"+27 79 361 2279\"\n").expect("write csv");
    let txt = temp.path().join("numbers.txt");
    fs::write(&txt, "0825551234\n\n  0793612279  \n").expect("write txt");

    assert_eq!(
        read_rows(&csv).expect("csv rows"),
        vec!["Ada", "082 555 1234", "Grace", "+27 79 361 2279"]
    );
    assert_eq!(
        read_rows(&txt).expect("txt rows"),
        vec!["0825551234", "0793612279"]
    );
}

#[test]
fn read_rows_rejects_spreadsheets() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("contacts.xlsx");
    fs::write(&path, b"PK").expect("write file");
    let err = read_rows(&path).unwrap_err();
    assert!(err.to_string().contains("unsupported file format"));
}
