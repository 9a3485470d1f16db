//! Recommendation rules
//!
//! A fixed rule table over the same statistics the health scorer reads.
//! At most one recommendation per rule, in a fixed order: cycle breaking,
//! coupling reduction, hotspot refactoring, layering.

use crate::insights::hotspots::Hotspot;
use crate::models::{Cycle, DependencyGraph, LayerMap};

pub(crate) fn generate(
    import_graph: &DependencyGraph,
    cycles: Option<&[Cycle]>,
    hotspots: Option<&[Hotspot]>,
    layers: Option<&LayerMap>,
) -> Vec<String> {
    let mut recommendations = Vec::new();
    let density = import_graph.density();

    if let Some(cycles) = cycles {
        if !cycles.is_empty() {
            recommendations.push(format!(
                "Break {} dependency cycles to improve maintainability",
                cycles.len()
            ));
        }
    }

    if density > 0.3 {
        recommendations.push(format!(
            "Reduce coupling between modules (current density: {density:.2})"
        ));
    }

    if let Some(top) = hotspots.and_then(|h| h.first()) {
        if top.in_degree > 30 {
            recommendations.push(format!(
                "Refactor hotspot '{}' with {} dependencies",
                top.id, top.in_degree
            ));
        }
    }

    if let Some(layers) = layers {
        if !layers.is_empty() && layers.len() <= 2 {
            recommendations.push(
                "Consider introducing more architectural layers for better separation"
                    .to_string(),
            );
        }
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GraphEdge, GraphNode};

    fn dense_graph() -> DependencyGraph {
        // 5 nodes, 8 edges: density 8 / 20 = 0.4
        let nodes = ["a", "b", "c", "d", "e"].map(GraphNode::new).to_vec();
        let edges = vec![
            GraphEdge::new("a", "b"),
            GraphEdge::new("a", "c"),
            GraphEdge::new("b", "c"),
            GraphEdge::new("b", "d"),
            GraphEdge::new("c", "d"),
            GraphEdge::new("c", "e"),
            GraphEdge::new("d", "e"),
            GraphEdge::new("e", "a"),
        ];
        DependencyGraph { nodes, edges }
    }

    fn top_hotspot(in_degree: usize) -> Vec<Hotspot> {
        vec![Hotspot {
            id: "core".to_string(),
            in_degree,
            out_degree: 2,
            centrality: 1.0,
            churn: 0,
            loc: 0,
            score: 12.0,
        }]
    }

    #[test]
    fn test_healthy_graph_yields_no_recommendations() {
        let graph = DependencyGraph {
            nodes: vec![GraphNode::new("a"), GraphNode::new("b")],
            edges: Vec::new(),
        };
        assert!(generate(&graph, None, None, None).is_empty());
    }

    #[test]
    fn test_all_rules_fire_in_fixed_order() {
        let cycles = vec![Cycle {
            nodes: vec!["a".into(), "b".into()],
            size: 2,
        }];
        let hotspots = top_hotspot(40);
        let mut layers = LayerMap::new();
        layers.insert(0, vec!["a".into()]);
        layers.insert(1, vec!["b".into()]);

        let recs = generate(&dense_graph(), Some(&cycles), Some(&hotspots), Some(&layers));
        assert_eq!(
            recs,
            vec![
                "Break 1 dependency cycles to improve maintainability".to_string(),
                "Reduce coupling between modules (current density: 0.40)".to_string(),
                "Refactor hotspot 'core' with 40 dependencies".to_string(),
                "Consider introducing more architectural layers for better separation"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_hotspot_rule_needs_degree_above_thirty() {
        let graph = DependencyGraph {
            nodes: vec![GraphNode::new("a"), GraphNode::new("b")],
            edges: Vec::new(),
        };
        assert!(generate(&graph, None, Some(&top_hotspot(30)), None).is_empty());
        assert_eq!(
            generate(&graph, None, Some(&top_hotspot(31)), None).len(),
            1
        );
    }

    #[test]
    fn test_empty_layer_map_is_not_a_layering_problem() {
        let graph = DependencyGraph::default();
        assert!(generate(&graph, None, None, Some(&LayerMap::new())).is_empty());
    }

    #[test]
    fn test_three_layers_suppress_layering_rule() {
        let mut layers = LayerMap::new();
        layers.insert(0, vec!["a".into()]);
        layers.insert(1, vec!["b".into()]);
        layers.insert(2, vec!["c".into()]);
        let graph = DependencyGraph::default();
        assert!(generate(&graph, None, None, Some(&layers)).is_empty());
    }
}
