//! Subgraph extraction around seed groups

use crate::data::seeds::SeedGroup;
use crate::graph::algorithms::induced_subgraph;
use crate::graph::{SubgraphEdge, WeightedGraph};

/// Extract the induced subgraph of every seed group, in group order.
///
/// Seeds the graph does not contain are reported and left out.
pub fn extract_seed_subgraphs(
    graph: &WeightedGraph,
    groups: Vec<SeedGroup>,
) -> Vec<(SeedGroup, Vec<SubgraphEdge>)> {
    groups
        .into_iter()
        .map(|group| {
            for seed in group.seeds.iter().filter(|s| !graph.contains_node(s)) {
                log::warn!(
                    "Seed {} from group {} does not exist in network",
                    seed,
                    group.name
                );
            }
            let edges = induced_subgraph(graph, &group.seeds);
            log::debug!("Group {}: {} edges", group.name, edges.len());
            (group, edges)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn each_group_gets_its_own_edges() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("A", "B", 1.0);
        builder.add_edge("B", "C", 2.0);
        builder.add_edge("C", "D", 3.0);
        let graph = builder.build();

        let groups = vec![
            SeedGroup {
                name: "left".into(),
                seeds: vec!["A".into(), "B".into()],
            },
            SeedGroup {
                name: "right".into(),
                seeds: vec!["C".into(), "D".into(), "nope".into()],
            },
            SeedGroup {
                name: "apart".into(),
                seeds: vec!["A".into(), "D".into()],
            },
        ];

        let result = extract_seed_subgraphs(&graph, groups);
        let sizes: Vec<(&str, usize)> = result
            .iter()
            .map(|(g, edges)| (g.name.as_str(), edges.len()))
            .collect();
        assert_eq!(sizes, vec![("left", 1), ("right", 1), ("apart", 0)]);
        assert_eq!(result[1].1[0].weight, 3.0);
    }
}
