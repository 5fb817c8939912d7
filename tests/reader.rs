use miniid3::prelude::*;

use std::fs;
use std::path::PathBuf;


fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir()
        .join(format!("miniid3-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}


#[test]
fn read_train_and_evaluate() {
    // The label is `1` iff the first two attributes agree.
    let training = "\
        1 1 1 1\n\
        1 1 2 1\n\
        1 2 1 2\n\
        1 2 2 2\n\
        2 1 1 2\n\
        2 1 2 2\n\
        2 2 1 1\n\
        2 2 2 1\n\
    ";
    let test = "\
        1 1 2 1\n\
        2 1 1 2\n\
        2 2 2 1\n\
    ";
    let train_path = write_temp("training.txt", training);
    let test_path = write_temp("test.txt", test);

    let train_sample = SampleReader::default()
        .file(&train_path)
        .read()
        .unwrap();
    let test_sample = SampleReader::default()
        .file(&test_path)
        .read()
        .unwrap();
    fs::remove_file(&train_path).unwrap();
    fs::remove_file(&test_path).unwrap();

    assert_eq!(train_sample.shape(), (8, 3));
    assert_eq!(test_sample.shape(), (3, 3));
    assert_eq!(train_sample.unique_target(), vec!["1", "2"]);

    let f = DecisionTreeBuilder::new()
        .build()
        .fit(&train_sample)
        .unwrap();
    assert_eq!(accuracy(&f, &train_sample).unwrap(), 1.0);
    assert_eq!(accuracy(&f, &test_sample).unwrap(), 1.0);
    assert_eq!(f.depth(), 2);
}


#[test]
fn malformed_file() {
    let path = write_temp("malformed.txt", "a x Yes\nb y z No\n");
    let err = SampleReader::default()
        .file(&path)
        .read()
        .unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(matches!(
        err,
        Error::FeatureLengthMismatch { expected: 2, found: 3, line: 2 }
    ));
}
