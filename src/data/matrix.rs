//! Dense adjacency matrix loading

use crate::data::open;
use crate::error::InputError;
use crate::graph::{GraphBuilder, WeightedGraph};
use ndarray::Array2;
use ndarray_npy::ReadNpyExt;
use std::io::BufRead;

/// Read a square matrix of whitespace-separated numbers
pub fn parse_matrix<R: BufRead>(reader: R, source: &str) -> Result<Array2<f64>, InputError> {
    let mut values = Vec::new();
    let mut width: Option<usize> = None;
    let mut rows = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| InputError::io(source, e))?;
        if line.trim().is_empty() {
            continue;
        }

        let start = values.len();
        for token in line.split_whitespace() {
            match token.parse::<f64>() {
                Ok(v) if v.is_finite() => values.push(v),
                _ => {
                    return Err(InputError::InvalidWeight {
                        path: source.to_string(),
                        line: i + 1,
                        value: token.to_string(),
                    })
                }
            }
        }
        let row_width = values.len() - start;

        match width {
            None => width = Some(row_width),
            Some(w) if w != row_width => {
                return Err(InputError::InvalidMatrix {
                    path: source.to_string(),
                    reason: format!("row {} has {} columns, expected {}", rows + 1, row_width, w),
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    let cols = width.unwrap_or(0);
    if rows != cols {
        return Err(InputError::InvalidMatrix {
            path: source.to_string(),
            reason: format!("matrix is {}x{}, expected a square matrix", rows, cols),
        });
    }

    Array2::from_shape_vec((rows, cols), values).map_err(|e| InputError::InvalidMatrix {
        path: source.to_string(),
        reason: e.to_string(),
    })
}

/// Read a binary NumPy `.npy` array as a square matrix.
///
/// `f64`, `f32` and `i64` element types are accepted and widened to `f64`.
pub fn parse_npy(bytes: &[u8], source: &str) -> Result<Array2<f64>, InputError> {
    let matrix = match Array2::<f64>::read_npy(bytes) {
        Ok(matrix) => matrix,
        Err(err) => Array2::<f32>::read_npy(bytes)
            .map(|m| m.mapv(f64::from))
            .or_else(|_| Array2::<i64>::read_npy(bytes).map(|m| m.mapv(|v| v as f64)))
            .map_err(|_| InputError::InvalidMatrix {
                path: source.to_string(),
                reason: err.to_string(),
            })?,
    };

    if matrix.nrows() != matrix.ncols() {
        return Err(InputError::InvalidMatrix {
            path: source.to_string(),
            reason: format!(
                "matrix is {}x{}, expected a square matrix",
                matrix.nrows(),
                matrix.ncols()
            ),
        });
    }
    if matrix.iter().any(|v| !v.is_finite()) {
        return Err(InputError::InvalidMatrix {
            path: source.to_string(),
            reason: "matrix contains non-finite values".to_string(),
        });
    }

    Ok(matrix)
}

/// Read node names, one per non-blank line
pub fn parse_node_names<R: BufRead>(reader: R, source: &str) -> Result<Vec<String>, InputError> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| InputError::io(source, e))?;
        let name = line.trim_end_matches('\r');
        if !name.trim().is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

/// Build a graph from a matrix: every positive entry becomes an edge.
///
/// Without names, nodes are called `0..n-1`.
pub fn matrix_to_graph(
    matrix: &Array2<f64>,
    names: Option<Vec<String>>,
    names_source: &str,
) -> Result<WeightedGraph, InputError> {
    let order = matrix.nrows();
    let names = match names {
        Some(names) if names.len() != order => {
            return Err(InputError::NodeCountMismatch {
                path: names_source.to_string(),
                expected: order,
                found: names.len(),
            });
        }
        Some(names) => names,
        None => (0..order).map(|i| i.to_string()).collect(),
    };

    let mut builder = GraphBuilder::with_capacity(order, order);
    for ((row, col), &value) in matrix.indexed_iter() {
        if value > 0.0 {
            builder.add_edge(&names[row], &names[col], value);
        }
    }

    Ok(builder.build())
}

fn load_node_names(nodes: Option<&str>) -> Result<Option<Vec<String>>, InputError> {
    match nodes {
        Some(nodes_path) => Ok(Some(parse_node_names(open(nodes_path)?, nodes_path)?)),
        None => Ok(None),
    }
}

/// Load a graph from a text matrix file and an optional node-name file
pub fn load_adjacency_matrix(path: &str, nodes: Option<&str>) -> Result<WeightedGraph, InputError> {
    let matrix = parse_matrix(open(path)?, path)?;
    log::debug!("Read {}x{} adjacency matrix", matrix.nrows(), matrix.ncols());

    matrix_to_graph(&matrix, load_node_names(nodes)?, nodes.unwrap_or(path))
}

/// Load a graph from a `.npy` matrix file and an optional node-name file
pub fn load_npy_matrix(path: &str, nodes: Option<&str>) -> Result<WeightedGraph, InputError> {
    let bytes = std::fs::read(path).map_err(|e| InputError::io(path, e))?;
    let matrix = parse_npy(&bytes, path)?;
    log::debug!("Read {}x{} npy matrix", matrix.nrows(), matrix.ncols());

    matrix_to_graph(&matrix, load_node_names(nodes)?, nodes.unwrap_or(path))
}
