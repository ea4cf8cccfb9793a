use std::path::Path;

use polars::prelude::*;

pub const ALGORITHM: &str = "Algorithm";
pub const DATA_ORDER: &str = "Data Order";
pub const DATA_SIZE: &str = "Data Size";
pub const COMPARISONS: &str = "Comparisons";
pub const TIME: &str = "Running Time (ms)";

/// Load a tab-separated result log.
pub fn get_data(path: &Path) -> anyhow::Result<DataFrame> {
    Ok(CsvReader::from_path(path)?
        .with_separator(b'\t')
        .has_header(true)
        .finish()?)
}

/// Mean comparisons and time per (size, order, algorithm) cell.
pub fn mean_per_cell(df: &DataFrame) -> anyhow::Result<DataFrame> {
    Ok(df
        .clone()
        .lazy()
        .group_by([DATA_SIZE, DATA_ORDER, ALGORITHM])
        .agg([
            len().alias("trials"),
            col(COMPARISONS).mean(),
            col(TIME).mean(),
        ])
        .sort_by_exprs(
            [col(DATA_SIZE), col(DATA_ORDER), col(ALGORITHM)],
            [false, false, false],
            false,
            true,
        )
        .collect()?)
}

/// Totals per algorithm over every trial in the log.
pub fn totals_per_algorithm(df: &DataFrame) -> anyhow::Result<DataFrame> {
    Ok(df
        .clone()
        .lazy()
        .group_by([ALGORITHM])
        .agg([
            len().alias("trials"),
            col(COMPARISONS).sum().alias("total comparisons"),
            col(TIME).sum().alias("total time (ms)"),
            col(TIME).mean().alias("mean time (ms)"),
        ])
        .sort_by_exprs([col(ALGORITHM)], [false], false, true)
        .collect()?)
}
