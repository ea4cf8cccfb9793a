use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
    time::Duration,
};

use sortbench::record::TSV_HEADER;
use tempdir::TempDir;

/// A scratch directory to run the `sortbench` binary in.
struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    fn new() -> anyhow::Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new("sortbench")?,
        })
    }

    fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<Output> {
        Ok(Command::new(env!("CARGO_BIN_EXE_sortbench"))
            .current_dir(self.path())
            .env("RUST_LOG", "warn")
            .args(args)
            .output()?)
    }

    fn run_ok(&self, args: &[&str]) -> anyhow::Result<String> {
        let output = self.run(args)?;
        if !output.status.success() {
            anyhow::bail!(
                "sortbench {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(String::from_utf8(output.stdout)?)
    }

    /// Run a sweep and return its run id.
    fn sweep(&self, args: &[&str]) -> anyhow::Result<String> {
        let stdout = self.run_ok(&[&["sweep", "--logs-dir", "logs"][..], args].concat())?;
        let Some(run_id) = stdout
            .lines()
            .find_map(|l| l.strip_prefix("RUNID: "))
            .map(|s| s.trim().to_owned())
        else {
            anyhow::bail!("No run id in output: {}", stdout);
        };
        Ok(run_id)
    }

    fn file(&self, name: &str, content: &str) -> anyhow::Result<PathBuf> {
        let path = self.path().join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }
}

#[test]
fn sweep_writes_run_directory() -> anyhow::Result<()> {
    let ws = Workspace::new()?;
    let first = ws.sweep(&["-s", "20", "-s", "50", "--seed", "3"])?;
    let logs = ws.path().join("logs");
    let run_dir = logs.join(&first);
    assert!(run_dir.is_dir());
    // 2 sizes x 4 orders x 3 algorithms
    let results = std::fs::read_to_string(run_dir.join("results.tsv"))?;
    let lines = results.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], TSV_HEADER);
    assert_eq!(lines.len(), 1 + 24);
    assert!(lines[1].starts_with("random\t20\tinsertion_sort\t"));
    let info = std::fs::read_to_string(run_dir.join("config.toml"))?;
    assert!(info.contains(&format!("runid = \"{}\"", first)));
    assert!(info.contains("seed = \"3\""));
    assert!(info.contains("start-timestamp-utc"));
    assert!(info.contains("finish-timestamp-utc"));
    assert_eq!(std::fs::read_link(logs.join("latest"))?, PathBuf::from(&first));

    // run ids have one-second resolution
    std::thread::sleep(Duration::from_millis(1100));
    let second = ws.sweep(&["-s", "10"])?;
    assert_ne!(first, second);
    assert_eq!(std::fs::read_link(logs.join("latest"))?, PathBuf::from(&second));
    let results = std::fs::read_to_string(logs.join("latest").join("results.tsv"))?;
    assert_eq!(results.lines().count(), 1 + 12);
    Ok(())
}

#[test]
fn sweep_uses_profiles_from_config() -> anyhow::Result<()> {
    let ws = Workspace::new()?;
    ws.file(
        "sortbench.toml",
        r#"
        [profiles.tiny]
        sizes = [8]
        distributions = ["reverse"]
        algorithms = ["insertion_sort", "bogo_sort"]
        "#,
    )?;
    let run_id = ws.sweep(&["--profile", "tiny"])?;
    assert!(run_id.starts_with("tiny-"));
    let results = std::fs::read_to_string(ws.path().join("logs").join(run_id).join("results.tsv"))?;
    let lines = results.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("reverse\t8\tinsertion_sort\t28\t"));
    assert!(!ws.run(&["sweep", "--profile", "nightly"])?.status.success());
    Ok(())
}

#[test]
fn report_latest_run_and_file() -> anyhow::Result<()> {
    let ws = Workspace::new()?;
    assert!(!ws.run(&["report", "--logs-dir", "logs"])?.status.success());
    let run_id = ws.sweep(&["-s", "16", "--seed", "1"])?;
    let report = ws.run_ok(&["report", "--logs-dir", "logs"])?;
    assert!(report.contains(&run_id));
    assert!(report.contains("Mean per input"));
    assert!(report.contains("Per algorithm"));
    for algorithm in ["insertion_sort", "shell_sort", "binary_insertion_sort"] {
        assert!(report.contains(algorithm));
    }
    let log = ws.path().join("logs").join(&run_id).join("results.tsv");
    let log = log.to_string_lossy();
    let report = ws.run_ok(&["report", "--file", &log])?;
    assert!(report.contains("Benchmark results"));
    assert!(report.contains("nearly_sorted"));
    Ok(())
}

#[test]
fn run_writes_log_and_sorted_output() -> anyhow::Result<()> {
    let ws = Workspace::new()?;
    ws.run_ok(&[
        "run",
        "insertion_sort",
        "--size",
        "5",
        "--order",
        "reverse",
        "--log",
        "out.tsv",
        "--output",
        "sorted.txt",
    ])?;
    assert_eq!(
        std::fs::read_to_string(ws.path().join("sorted.txt"))?,
        "5\n0 1 2 3 4\n"
    );
    let log = std::fs::read_to_string(ws.path().join("out.tsv"))?;
    assert_eq!(
        log.lines().collect::<Vec<_>>(),
        vec![TSV_HEADER, "reverse\t5\tinsertion_sort\t10\t0"]
    );
    // without an order every distribution runs
    ws.run_ok(&["run", "shell_sort", "--size", "10", "--log", "out.tsv"])?;
    let log = std::fs::read_to_string(ws.path().join("out.tsv"))?;
    assert_eq!(log.lines().count(), 1 + 1 + 4);
    Ok(())
}

#[test]
fn compare_reads_input_files() -> anyhow::Result<()> {
    let ws = Workspace::new()?;
    ws.file("input.txt", "5\n5 3 1 4 2\n")?;
    let stdout = ws.run_ok(&[
        "compare",
        "insertion_sort",
        "binary_insertion_sort",
        "--input",
        "input.txt",
    ])?;
    assert!(stdout.contains("insertion_sort: 9 comparisons"));
    assert!(stdout.contains("binary_insertion_sort: 6 comparisons"));
    Ok(())
}

fn assert_fails_with(output: Output, message: &str) {
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(message), "{}", stderr);
}

#[test]
fn bad_requests_fail_with_a_message() -> anyhow::Result<()> {
    let ws = Workspace::new()?;
    let output = ws.run(&["run", "bogo_sort", "--size", "10"])?;
    assert_eq!(output.status.code(), Some(1));
    assert_fails_with(output, "No such algorithm: `bogo_sort`");
    assert_fails_with(ws.run(&["run", "insertion_sort"])?, "Invalid argument");
    assert_fails_with(
        ws.run(&["run", "insertion_sort", "--size", "10", "--order", "shuffled"])?,
        "Unknown data order",
    );
    assert_fails_with(
        ws.run(&["compare", "insertion_sort", "shell_sort", "--size", "10"])?,
        "--order",
    );
    assert_fails_with(
        ws.run(&["run", "insertion_sort", "--input", "missing.txt"])?,
        "Could not open",
    );
    ws.file("bad.txt", "3\n1 2\n")?;
    assert_fails_with(
        ws.run(&["run", "insertion_sort", "--input", "bad.txt"])?,
        "Malformed input file",
    );
    Ok(())
}
