//! External clustering loader

use crate::cluster::Cluster;
use crate::data::{expect_fields, open, tab_records};
use crate::error::InputError;
use std::collections::HashMap;
use std::io::BufRead;

/// Load clusters from `cluster_id<TAB>node_id` lines
pub fn load_clusters(path: &str) -> Result<Vec<Cluster>, InputError> {
    let clusters = parse_clusters(open(path)?, path)?;
    log::info!("Loaded {} clusters from {}", clusters.len(), path);
    Ok(clusters)
}

/// Parse clusters from any reader.
///
/// Clusters come back in first-seen order and members in line order.
/// Repeated members are kept.
pub fn parse_clusters<R: BufRead>(reader: R, source: &str) -> Result<Vec<Cluster>, InputError> {
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (line, mut fields) in tab_records(reader, source)? {
        expect_fields(&fields, 2, source, line)?;
        let node = fields.pop().unwrap_or_default();
        let id = fields.pop().unwrap_or_default();

        match positions.get(&id) {
            Some(&pos) => clusters[pos].members.push(node),
            None => {
                positions.insert(id.clone(), clusters.len());
                clusters.push(Cluster::new(id, vec![node]));
            }
        }
    }

    Ok(clusters)
}
