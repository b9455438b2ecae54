//! Tab-separated input readers

pub mod edge_list;
pub mod matrix;
pub mod preprocessing;
pub mod seeds;

use crate::error::InputError;
use crate::config::GraphFormat;
use crate::graph::WeightedGraph;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Open a file for buffered reading
pub(crate) fn open(path: &str) -> Result<BufReader<File>, InputError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| InputError::io(path, e))
}

/// A non-blank input line split on tabs
pub(crate) type Record = (usize, Vec<String>);

/// Read the non-blank lines of a reader as `(line_number, fields)`.
///
/// Line numbers are 1-based. Trailing `\r` is stripped before splitting on tabs.
pub(crate) fn tab_records<R: BufRead>(reader: R, source: &str) -> Result<Vec<Record>, InputError> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| InputError::io(source, e))?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        records.push((i + 1, line.split('\t').map(str::to_string).collect()));
    }
    Ok(records)
}

/// Require exactly `expected` fields on a record
pub(crate) fn expect_fields(
    fields: &[String],
    expected: usize,
    source: &str,
    line: usize,
) -> Result<(), InputError> {
    if fields.len() != expected {
        return Err(InputError::MalformedLine {
            path: source.to_string(),
            line,
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

/// Load a graph in either supported input format
pub fn load_graph(
    path: &str,
    format: GraphFormat,
    nodes: Option<&str>,
) -> Result<WeightedGraph, InputError> {
    log::info!("Reading graph ({:?}) from {}", format, path);

    let graph = match format {
        GraphFormat::Edges => edge_list::load_edge_list(path)?,
        GraphFormat::Matrix => matrix::load_adjacency_matrix(path, nodes)?,
        GraphFormat::Npy => matrix::load_npy_matrix(path, nodes)?,
    };

    log::info!(
        "Loaded graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped_and_numbering_is_physical() {
        let text = "a\tb\n\n  \nc\td\r\n";
        let records = tab_records(text.as_bytes(), "mem").unwrap();
        assert_eq!(
            records,
            vec![
                (1, vec!["a".to_string(), "b".to_string()]),
                (4, vec!["c".to_string(), "d".to_string()]),
            ]
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = open("/definitely/not/here.tsv").unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }
}
