use sortbench::{
    input::{parse_sequence, read_sequence, write_sequence},
    BenchError,
};
use tempdir::TempDir;

#[test]
fn parses_length_then_values() -> anyhow::Result<()> {
    assert_eq!(parse_sequence("5\n3 -1 4\n1 5\n")?, vec![3, -1, 4, 1, 5]);
    assert_eq!(parse_sequence("0")?, Vec::<i64>::new());
    // surplus tokens are ignored
    assert_eq!(parse_sequence("2 10 20 30")?, vec![10, 20]);
    Ok(())
}

#[test]
fn rejects_malformed_files() {
    for content in ["", "   \n", "x 1 2", "-3 1 2 3", "3 1 2", "2 1 two"] {
        assert!(
            matches!(parse_sequence(content), Err(BenchError::MalformedInput(_))),
            "{:?}",
            content
        );
    }
}

#[test]
fn missing_file_is_an_open_failure() -> anyhow::Result<()> {
    let dir = TempDir::new("sortbench")?;
    let err = read_sequence(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, BenchError::FileOpen { .. }));
    assert!(err.to_string().contains("missing.txt"));
    Ok(())
}

#[test]
fn writes_length_line_then_values() -> anyhow::Result<()> {
    let dir = TempDir::new("sortbench")?;
    let path = dir.path().join("sorted.txt");
    write_sequence(&path, &[1, 2, 3, 5])?;
    assert_eq!(std::fs::read_to_string(&path)?, "4\n1 2 3 5\n");
    assert_eq!(read_sequence(&path)?, vec![1, 2, 3, 5]);
    Ok(())
}
