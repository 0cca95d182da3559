//! Second pass: link every node to the edges touching it and validate the graph.
//!
//! Adjacency is purely geometric:
//! - left/right: a horizontal edge key at `(line, left_column - 1)` / `(line, right_column + 1)`
//! - up/down: a vertical edge key at `(line - 1, left_column)` / `(line + 1, left_column)`
//!
//! Vertical edges always attach to a node's left column.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::SemanticError;
use crate::graph::{EdgeId, Graph, NodeId};
use crate::shape::Shapes;

pub(crate) fn connect(shapes: Shapes) -> Result<Graph, SemanticError> {
    let Shapes {
        mut nodes,
        mut edges,
        index,
    } = shapes;

    let mut labeled_nodes: IndexMap<String, NodeId> = IndexMap::new();
    for ix in 0..nodes.len() {
        let id = NodeId(ix);
        let node = &mut nodes[ix];

        node.left = index
            .horizontal_edges
            .get(node.line, node.left_column - 1);
        node.right = index
            .horizontal_edges
            .get(node.line, node.right_column + 1);
        node.up = index.vertical_edges.get(node.line - 1, node.left_column);
        node.down = index.vertical_edges.get(node.line + 1, node.left_column);

        if let Some(edge) = node.left {
            edges[edge.0].destination_right_or_down = Some(id);
        }
        if let Some(edge) = node.right {
            edges[edge.0].destination_left_or_up = Some(id);
        }
        if let Some(edge) = node.up {
            edges[edge.0].destination_right_or_down = Some(id);
        }
        if let Some(edge) = node.down {
            edges[edge.0].destination_left_or_up = Some(id);
        }

        let Some(label) = nodes[ix].label.clone() else {
            continue;
        };
        match labeled_nodes.entry(label) {
            Entry::Occupied(entry) => {
                return Err(SemanticError::DuplicateNodeLabel {
                    label: entry.key().clone(),
                    first: nodes[entry.get().0].position(),
                    second: nodes[ix].position(),
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(id);
            }
        }
    }

    let mut labeled_edges: IndexMap<String, EdgeId> = IndexMap::new();
    for (ix, edge) in edges.iter().enumerate() {
        let id = EdgeId(ix);
        if edge.destination_left_or_up.is_none() && edge.destination_right_or_down.is_none() {
            return Err(SemanticError::DanglingEdge {
                position: edge.position(),
            });
        }

        let Some(label) = &edge.label else {
            continue;
        };
        match labeled_edges.entry(label.clone()) {
            Entry::Occupied(entry) if *entry.get() != id => {
                return Err(SemanticError::DuplicateEdgeLabel {
                    label: label.clone(),
                    first: edges[entry.get().0].position(),
                    second: edge.position(),
                });
            }
            Entry::Occupied(_) => {}
            Entry::Vacant(entry) => {
                entry.insert(id);
            }
        }
    }

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        labeled_nodes = labeled_nodes.len(),
        labeled_edges = labeled_edges.len(),
        "connected graph"
    );
    Ok(Graph {
        nodes,
        edges,
        labeled_nodes,
        labeled_edges,
        index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Direction;
    use crate::lexer::tokenize;
    use crate::shape::build_shapes;
    use crate::token::Position;

    fn graph(text: &str) -> Result<Graph, SemanticError> {
        connect(build_shapes(&tokenize(text).unwrap()).unwrap())
    }

    #[test]
    fn links_all_four_sides() {
        let text = "  |\n -[]-\n  |";
        let g = graph(text).unwrap();
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 4);
        let node = &g.nodes()[0];
        assert_eq!(node.position(), Position::new(2, 3));
        for direction in Direction::ALL {
            assert!(node.edge(direction).is_some(), "{direction:?} not linked");
        }
        let up = &g[node.up().unwrap()];
        assert_eq!(up.destination_right_or_down(), Some(NodeId(0)));
        assert_eq!(up.destination_left_or_up(), None);
        let down = &g[node.down().unwrap()];
        assert_eq!(down.destination_left_or_up(), Some(NodeId(0)));
        let left = &g[node.left().unwrap()];
        assert_eq!(left.destination_right_or_down(), Some(NodeId(0)));
        let right = &g[node.right().unwrap()];
        assert_eq!(right.destination_left_or_up(), Some(NodeId(0)));
    }

    #[test]
    fn vertical_edges_attach_to_the_left_column_only() {
        let err = graph("[AB]\n   |").unwrap_err();
        assert_eq!(
            err,
            SemanticError::DanglingEdge {
                position: Position::new(2, 4)
            }
        );
        assert!(graph("[AB]\n|").is_ok());
    }

    #[test]
    fn edge_with_no_nodes_is_rejected() {
        assert_eq!(
            graph("[A]\n\n--").unwrap_err(),
            SemanticError::DanglingEdge {
                position: Position::new(3, 1)
            }
        );
    }

    #[test]
    fn one_sided_edges_are_allowed() {
        let g = graph("[A]--").unwrap();
        let edge = &g.edges()[0];
        assert_eq!(edge.endpoints(), (Some(NodeId(0)), None));
    }

    #[test]
    fn duplicate_node_label_reports_both_positions() {
        assert_eq!(
            graph("[A]-[A]").unwrap_err(),
            SemanticError::DuplicateNodeLabel {
                label: "A".to_string(),
                first: Position::new(1, 1),
                second: Position::new(1, 5),
            }
        );
    }

    #[test]
    fn duplicate_edge_label_reports_both_positions() {
        assert_eq!(
            graph("[A]-x-[B]-x-[C]").unwrap_err(),
            SemanticError::DuplicateEdgeLabel {
                label: "x".to_string(),
                first: Position::new(1, 4),
                second: Position::new(1, 10),
            }
        );
    }

    #[test]
    fn edge_keyed_twice_is_registered_once() {
        let g = graph("[A]--long--[B]").unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.labeled_edges().len(), 1);
        assert_eq!(g.edge_by_label("long"), Some(EdgeId(0)));
    }

    #[test]
    fn labels_are_separate_namespaces_for_nodes_and_edges() {
        let g = graph("[A]-A-[B]").unwrap();
        assert_eq!(g.node_by_label("A"), Some(NodeId(0)));
        assert_eq!(g.edge_by_label("A"), Some(EdgeId(0)));
    }
}
