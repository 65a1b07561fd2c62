//! On-disk round trips through real files

use std::fs;
use std::io::Write;
use tensorfile::{DType, Tensor, TensorFile, TensorFileError, WriteOptions, raw, read_file, write_file};

fn dataset() -> TensorFile {
    let mut tf = TensorFile::new();
    tf.insert(
        "sky_params_rgb",
        Tensor::from_values(vec![2, 3, 3], &(0..18).map(|v| v as f64 * 0.25).collect::<Vec<_>>())
            .unwrap(),
    )
    .unwrap();
    tf.insert("sun_ld_spec", Tensor::zeros(DType::F32, vec![11, 6]).unwrap())
        .unwrap();
    tf.insert("tag", Tensor::from_text("v1")).unwrap();
    tf
}

#[test]
fn write_then_read_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("datasets.bin");

    let input = dataset();
    let written = write_file(&path, &input, WriteOptions::default()).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), written);
    assert_eq!(read_file(&path).unwrap(), input);
}

#[test]
fn overwrite_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bin");
    fs::write(&path, vec![0xFFu8; 4096]).unwrap();

    let input = TensorFile::new().with("a", Tensor::scalar(1u8)).unwrap();
    let written = write_file(&path, &input, WriteOptions::default()).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), written);
    assert_eq!(read_file(&path).unwrap(), input);
}

#[test]
fn truncated_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cut.bin");
    write_file(&path, &dataset(), WriteOptions::default()).unwrap();

    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() - 1]).unwrap();
    assert!(matches!(
        read_file(&path),
        Err(TensorFileError::CorruptHeader(_))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        read_file(dir.path().join("nope.bin")),
        Err(TensorFileError::Io(_))
    ));
}

#[test]
fn independent_readers_share_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.bin");
    let input = dataset();
    write_file(&path, &input, WriteOptions::default()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let path = path.clone();
            std::thread::spawn(move || read_file(path).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), input);
    }
}

#[test]
fn raw_dumps_convert_into_a_container() {
    let dir = tempfile::tempdir().unwrap();
    let raw_path = dir.path().join("sky_rgb_rad.bin");

    let values = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
    let mut raw_bytes = Vec::new();
    raw_bytes.extend_from_slice(b"SKY");
    raw_bytes.extend_from_slice(&1u32.to_le_bytes());
    raw_bytes.extend_from_slice(&2u64.to_le_bytes());
    raw_bytes.extend_from_slice(&3u64.to_le_bytes());
    raw_bytes.extend_from_slice(&2u64.to_le_bytes());
    for v in values {
        raw_bytes.extend_from_slice(&v.to_le_bytes());
    }
    fs::File::create(&raw_path)
        .unwrap()
        .write_all(&raw_bytes)
        .unwrap();

    let tensor = raw::read_raw_file(&raw_path, DType::F64).unwrap();
    assert_eq!(tensor.shape, vec![3, 2]);

    let out_path = dir.path().join("sunsky_datasets.bin");
    let container = TensorFile::new().with("sky_rad_rgb", tensor).unwrap();
    write_file(&out_path, &container, WriteOptions::default()).unwrap();

    let loaded = read_file(&out_path).unwrap();
    assert_eq!(
        loaded.require("sky_rad_rgb").unwrap().to_vec::<f64>().unwrap(),
        values.to_vec()
    );
}
