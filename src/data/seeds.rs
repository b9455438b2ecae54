//! Seed group loading for subgraph extraction

use crate::data::{expect_fields, open, tab_records};
use crate::error::InputError;
use std::io::BufRead;

/// A named group of seed nodes
#[derive(Debug, Clone, PartialEq)]
pub struct SeedGroup {
    pub name: String,
    pub seeds: Vec<String>,
}

/// Load seed groups from `name<TAB>seed1,seed2,...` lines
pub fn load_seed_groups(path: &str) -> Result<Vec<SeedGroup>, InputError> {
    parse_seed_groups(open(path)?, path)
}

/// Parse seed groups from any reader, keeping file order
pub fn parse_seed_groups<R: BufRead>(reader: R, source: &str) -> Result<Vec<SeedGroup>, InputError> {
    let mut groups = Vec::new();

    for (line, fields) in tab_records(reader, source)? {
        expect_fields(&fields, 2, source, line)?;
        let seeds = fields[1]
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        groups.push(SeedGroup {
            name: fields[0].clone(),
            seeds,
        });
    }

    Ok(groups)
}
