use std::io;

use skelgen::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::SkeletonDoesNotExistError { path: "./missing".to_string() };
    assert_eq!(err.to_string(), "Skeleton does not exist: './missing'.");

    let err = Error::MissingDescriptorError {
        skeleton_root: "./skeleton".to_string(),
        tried: "config.xml, config.json".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "No skeleton descriptor found in './skeleton' (tried: config.xml, config.json)."
    );

    let err = Error::ProcessError("entry skipped".to_string());
    assert_eq!(err.to_string(), "Process error: entry skipped.");
}
