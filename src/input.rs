//! Sequence files: the length `n` as the first token, then `n` whitespace-separated integers.

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use crate::{
    data::Sequence,
    error::{BenchError, Result},
};

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| BenchError::FileOpen {
        path: path.to_owned(),
        source,
    })
}

/// Parse the contents of a sequence file.
pub fn parse_sequence(content: &str) -> Result<Sequence> {
    let mut tokens = content.split_whitespace();
    let Some(first) = tokens.next() else {
        return Err(BenchError::MalformedInput("missing sequence length".to_owned()));
    };
    let n = first.parse::<usize>().map_err(|_| {
        BenchError::MalformedInput(format!("invalid sequence length `{}`", first))
    })?;
    let mut values = Vec::with_capacity(n);
    for index in 0..n {
        let Some(token) = tokens.next() else {
            return Err(BenchError::MalformedInput(format!(
                "expected {} values, found {}",
                n, index
            )));
        };
        let value = token.parse::<i64>().map_err(|_| {
            BenchError::MalformedInput(format!("value #{} is not an integer: `{}`", index, token))
        })?;
        values.push(value);
    }
    let surplus = tokens.count();
    if surplus > 0 {
        log::warn!("Ignoring {} trailing tokens after {} values", surplus, n);
    }
    Ok(values)
}

/// Load a sequence file.
pub fn read_sequence(path: impl AsRef<Path>) -> Result<Sequence> {
    let path = path.as_ref();
    let mut content = String::new();
    open(path)?.read_to_string(&mut content).map_err(|e| {
        BenchError::MalformedInput(format!("{}: {}", path.display(), e))
    })?;
    parse_sequence(&content)
}

/// Write a sequence as its length on one line and the space-separated values on the next.
pub fn write_sequence(path: impl AsRef<Path>, data: &[i64]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| BenchError::FileOpen {
        path: path.to_owned(),
        source,
    })?;
    let mut f = BufWriter::new(file);
    writeln!(f, "{}", data.len())?;
    let values = data.iter().map(|v| v.to_string()).collect::<Vec<_>>();
    writeln!(f, "{}", values.join(" "))?;
    f.flush()?;
    Ok(())
}
