use std::{
    cell::RefCell,
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
    rc::Rc,
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};

/// Header row of the tab-separated result log.
pub const TSV_HEADER: &str = "Data Order\tData Size\tAlgorithm\tComparisons\tRunning Time (ms)";

/// Outcome of one trial: one algorithm run once against one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkResult {
    pub data_order: String,
    pub size: usize,
    pub algorithm: String,
    pub comparisons: u64,
    pub time_ms: u128,
}

impl BenchmarkResult {
    /// The result as a result-log row, without the trailing newline.
    pub fn to_tsv_row(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.data_order, self.size, self.algorithm, self.comparisons, self.time_ms
        )
    }

    fn stats(&self) -> [(&'static str, String); 5] {
        [
            ("time", self.time_ms.to_string()),
            ("algorithm", self.algorithm.clone()),
            ("comparisons", self.comparisons.to_string()),
            ("data_order", self.data_order.clone()),
            ("size", self.size.to_string()),
        ]
    }
}

/// Receives results in the order trials complete.
pub trait ResultSink {
    fn record(&mut self, result: &BenchmarkResult) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Keeps results in memory. Clones share the same log.
#[derive(Default, Clone)]
pub struct MemorySink {
    results: Rc<RefCell<Vec<BenchmarkResult>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> Vec<BenchmarkResult> {
        self.results.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.results.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.borrow().is_empty()
    }
}

impl ResultSink for MemorySink {
    fn record(&mut self, result: &BenchmarkResult) -> Result<()> {
        self.results.borrow_mut().push(result.clone());
        Ok(())
    }
}

/// Appends rows to a tab-separated result log, writing the header first if the file is new or empty.
pub struct TsvLogSink {
    writer: BufWriter<std::fs::File>,
}

impl TsvLogSink {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_owned();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| BenchError::FileOpen { path, source })?;
        let is_empty = file.metadata()?.len() == 0;
        let mut writer = BufWriter::new(file);
        if is_empty {
            writeln!(writer, "{}", TSV_HEADER)?;
        }
        Ok(Self { writer })
    }
}

impl ResultSink for TsvLogSink {
    fn record(&mut self, result: &BenchmarkResult) -> Result<()> {
        writeln!(self.writer, "{}", result.to_tsv_row())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[clap(rename_all = "kebab_case")]
#[serde(rename_all = "kebab-case")]
pub enum StatPrintFormat {
    #[default]
    Table,
    Yaml,
    Json,
}

/// Prints every result to stderr between statistics banners.
pub struct ConsoleSink {
    format: StatPrintFormat,
}

impl ConsoleSink {
    pub fn new(format: StatPrintFormat) -> Self {
        Self { format }
    }

    /// Renders one result in the configured format.
    pub fn render(&self, result: &BenchmarkResult) -> String {
        let force_table = std::env::var("SORTBENCH_LOG_STAT_FORMAT") == Ok("table".to_owned());
        let format = if force_table {
            StatPrintFormat::Table
        } else {
            self.format
        };
        let stats = result.stats();
        match format {
            StatPrintFormat::Table => {
                let names = stats.iter().map(|(k, _)| *k).collect::<Vec<_>>();
                let values = stats.iter().map(|(_, v)| v.as_str()).collect::<Vec<_>>();
                format!("{}\n{}", names.join("\t"), values.join("\t"))
            }
            StatPrintFormat::Yaml => stats
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect::<Vec<_>>()
                .join("\n"),
            StatPrintFormat::Json => {
                serde_json::to_string(result).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
            }
        }
    }
}

impl ResultSink for ConsoleSink {
    fn record(&mut self, result: &BenchmarkResult) -> Result<()> {
        eprintln!(
            "============================ Sortbench Statistics =============================="
        );
        eprintln!("{}", self.render(result));
        eprintln!(
            "------------------------------ End Statistics ----------------------------------"
        );
        Ok(())
    }
}

/// Fans every result out to all registered sinks, in registration order.
#[derive(Default)]
pub struct Sinks {
    sinks: Vec<Box<dyn ResultSink>>,
}

impl Sinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sink: Box<dyn ResultSink>) {
        self.sinks.push(sink);
    }
}

impl ResultSink for Sinks {
    fn record(&mut self, result: &BenchmarkResult) -> Result<()> {
        for sink in self.sinks.iter_mut() {
            sink.record(result)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        for sink in self.sinks.iter_mut() {
            sink.flush()?;
        }
        Ok(())
    }
}
