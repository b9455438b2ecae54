//! Weighted edge list loading

use crate::data::{expect_fields, open, tab_records};
use crate::error::InputError;
use crate::graph::{GraphBuilder, WeightedGraph};
use std::io::BufRead;

/// Load an undirected weighted graph from `node_a<TAB>node_b<TAB>weight` lines
pub fn load_edge_list(path: &str) -> Result<WeightedGraph, InputError> {
    parse_edge_list(open(path)?, path)
}

/// Parse an edge list from any reader; `source` names it in error messages
pub fn parse_edge_list<R: BufRead>(reader: R, source: &str) -> Result<WeightedGraph, InputError> {
    let mut builder = GraphBuilder::new();

    for (line, fields) in tab_records(reader, source)? {
        expect_fields(&fields, 3, source, line)?;
        let weight = parse_weight(&fields[2], source, line)?;
        builder.add_edge(&fields[0], &fields[1], weight);
    }

    Ok(builder.build())
}

/// Parse a distance weight, rejecting negative and non-finite values
pub(crate) fn parse_weight(raw: &str, source: &str, line: usize) -> Result<f64, InputError> {
    match raw.trim().parse::<f64>() {
        Ok(w) if w.is_finite() && w >= 0.0 => Ok(w),
        _ => Err(InputError::InvalidWeight {
            path: source.to_string(),
            line,
            value: raw.to_string(),
        }),
    }
}
