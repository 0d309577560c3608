use cardio_nn::data::{load_table, split_train_test};
use cardio_nn::CardioError;

const HEADER: &str = "age,sex,cp,trestbps,chol,fbs,restecg,thalach,exang,oldpeak,slope,ca,thal,target";

fn write_csv(name: &str, body: &str) -> String {
    let dir = std::env::temp_dir().join(format!("cardio-nn-loader-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("heart.csv");
    std::fs::write(&path, format!("{HEADER}\n{body}")).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_heart_rows_split_into_13_features_and_label() {
    let path = write_csv(
        "shape",
        "63,1,3,145,233,1,0,150,0,2.3,0,0,1,1\n\
         37,1,2,130,250,0,1,187,0,3.5,0,0,2,1\n\
         41,0,1,130,204,0,0,172,0,1.4,2,0,2,0\n",
    );

    let train = load_table(&path).unwrap();
    let test = load_table(&path).unwrap();
    let (train, test) = split_train_test(&train, &test, 13, 13).unwrap();

    for split in [&train, &test] {
        assert_eq!(split.len(), 3);
        assert_eq!(split.features.len(), split.labels.len());
        assert!(split.features.iter().all(|row| row.len() == 13));
    }
    assert_eq!(train.labels, vec![1.0, 1.0, 0.0]);
    assert_eq!(train.features[0][9], 2.3);
    assert_eq!(train, test);
}

#[test]
fn test_missing_value_is_an_error() {
    let path = write_csv("missing-value", "63,1,3,145,,1,0,150,0,2.3,0,0,1,1\n");

    match load_table(&path) {
        Err(CardioError::NonNumeric { row, column, .. }) => assert_eq!((row, column), (1, 4)),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_header_only_file_gives_no_rows() {
    let path = write_csv("header-only", "");
    assert!(load_table(&path).unwrap().is_empty());
}
