//! The parsed graph: arenas of nodes and edges linked by stable indices.
//!
//! Node/edge links are bidirectional (a node knows its four adjacent edges, an edge knows the
//! node at each end). Both sides hold [`NodeId`]/[`EdgeId`] indices into the [`Graph`]'s arenas,
//! which is the sole owner of every [`Node`] and [`Edge`].

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Value, json};
use std::ops::Index;

use crate::spatial::SpatialIndex;
use crate::token::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A side of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

/// One `[label]` box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub(crate) line: usize,
    pub(crate) left_column: usize,
    pub(crate) right_column: usize,
    pub(crate) label: Option<String>,
    pub(crate) left: Option<EdgeId>,
    pub(crate) right: Option<EdgeId>,
    pub(crate) up: Option<EdgeId>,
    pub(crate) down: Option<EdgeId>,
}

impl Node {
    pub(crate) fn new(
        line: usize,
        left_column: usize,
        right_column: usize,
        label: Option<String>,
    ) -> Self {
        Self {
            line,
            left_column,
            right_column,
            label,
            left: None,
            right: None,
            up: None,
            down: None,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Column of the `[`.
    pub fn left_column(&self) -> usize {
        self.left_column
    }

    /// Column of the `]`.
    pub fn right_column(&self) -> usize {
        self.right_column
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.left_column)
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn left(&self) -> Option<EdgeId> {
        self.left
    }

    pub fn right(&self) -> Option<EdgeId> {
        self.right
    }

    pub fn up(&self) -> Option<EdgeId> {
        self.up
    }

    pub fn down(&self) -> Option<EdgeId> {
        self.down
    }

    pub fn edge(&self, direction: Direction) -> Option<EdgeId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }
}

/// One dash run (horizontal) or pipe run (vertical), optionally carrying an inline label.
///
/// A horizontal edge has `top_line == bottom_line`; a vertical one has
/// `left_column == right_column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub(crate) orientation: Orientation,
    pub(crate) top_line: usize,
    pub(crate) bottom_line: usize,
    pub(crate) left_column: usize,
    pub(crate) right_column: usize,
    pub(crate) label: Option<String>,
    pub(crate) destination_left_or_up: Option<NodeId>,
    pub(crate) destination_right_or_down: Option<NodeId>,
}

impl Edge {
    pub(crate) fn horizontal(line: usize, left_column: usize, right_column: usize) -> Self {
        Self::new(Orientation::Horizontal, line, line, left_column, right_column)
    }

    pub(crate) fn vertical(column: usize, top_line: usize, bottom_line: usize) -> Self {
        Self::new(Orientation::Vertical, top_line, bottom_line, column, column)
    }

    fn new(
        orientation: Orientation,
        top_line: usize,
        bottom_line: usize,
        left_column: usize,
        right_column: usize,
    ) -> Self {
        Self {
            orientation,
            top_line,
            bottom_line,
            left_column,
            right_column,
            label: None,
            destination_left_or_up: None,
            destination_right_or_down: None,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn top_line(&self) -> usize {
        self.top_line
    }

    pub fn bottom_line(&self) -> usize {
        self.bottom_line
    }

    pub fn left_column(&self) -> usize {
        self.left_column
    }

    pub fn right_column(&self) -> usize {
        self.right_column
    }

    /// Top-left corner: the first dash or pipe of the run.
    pub fn position(&self) -> Position {
        Position::new(self.top_line, self.left_column)
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The node found before the run (to its left, or above it).
    pub fn destination_left_or_up(&self) -> Option<NodeId> {
        self.destination_left_or_up
    }

    /// The node found after the run (to its right, or below it).
    pub fn destination_right_or_down(&self) -> Option<NodeId> {
        self.destination_right_or_down
    }

    pub fn endpoints(&self) -> (Option<NodeId>, Option<NodeId>) {
        (self.destination_left_or_up, self.destination_right_or_down)
    }
}

/// Result of [`parse`](crate::parse). Immutable once returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) labeled_nodes: IndexMap<String, NodeId>,
    pub(crate) labeled_edges: IndexMap<String, EdgeId>,
    #[serde(skip)]
    pub(crate) index: SpatialIndex,
}

impl Graph {
    /// Nodes in discovery (reading) order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges of both orientations in discovery (reading) order of their first character.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn labeled_nodes(&self) -> &IndexMap<String, NodeId> {
        &self.labeled_nodes
    }

    pub fn labeled_edges(&self) -> &IndexMap<String, EdgeId> {
        &self.labeled_edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId)
    }

    pub fn node_by_label(&self, label: &str) -> Option<NodeId> {
        self.labeled_nodes.get(label).copied()
    }

    pub fn edge_by_label(&self, label: &str) -> Option<EdgeId> {
        self.labeled_edges.get(label).copied()
    }

    /// The node whose `[` sits at `position`.
    pub fn node_at(&self, position: Position) -> Option<NodeId> {
        self.index.nodes.get(position.line, position.column)
    }

    /// The edge whose first or last character sits at `position`.
    pub fn edge_at(&self, position: Position) -> Option<EdgeId> {
        let (line, column) = (position.line, position.column);
        self.index
            .horizontal_edges
            .get(line, column)
            .or_else(|| self.index.vertical_edges.get(line, column))
    }

    /// The node at the far end of the edge on `direction`'s side of `node`.
    pub fn neighbor(&self, node: NodeId, direction: Direction) -> Option<NodeId> {
        let edge = self.edge(self.node(node)?.edge(direction)?)?;
        match direction {
            Direction::Left | Direction::Up => edge.destination_left_or_up,
            Direction::Right | Direction::Down => edge.destination_right_or_down,
        }
    }

    /// Every `(side, edge, far node)` reachable from `node` in one hop.
    pub fn neighbors(&self, node: NodeId) -> Vec<(Direction, EdgeId, NodeId)> {
        let Some(n) = self.node(node) else {
            return Vec::new();
        };
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                let edge = n.edge(direction)?;
                let far = self.neighbor(node, direction)?;
                Some((direction, edge, far))
            })
            .collect()
    }

    /// Semantic snapshot for renderers and inspectors. References are arena indices or `null`.
    pub fn to_json(&self) -> Value {
        let nodes: Vec<Value> = self
            .nodes
            .iter()
            .map(|n| {
                json!({
                    "line": n.line,
                    "leftColumn": n.left_column,
                    "rightColumn": n.right_column,
                    "label": n.label,
                    "left": n.left.map(EdgeId::index),
                    "right": n.right.map(EdgeId::index),
                    "up": n.up.map(EdgeId::index),
                    "down": n.down.map(EdgeId::index),
                })
            })
            .collect();
        let edges: Vec<Value> = self
            .edges
            .iter()
            .map(|e| {
                let orientation = match e.orientation {
                    Orientation::Horizontal => "horizontal",
                    Orientation::Vertical => "vertical",
                };
                json!({
                    "orientation": orientation,
                    "topLine": e.top_line,
                    "bottomLine": e.bottom_line,
                    "leftColumn": e.left_column,
                    "rightColumn": e.right_column,
                    "label": e.label,
                    "destinationLeftOrUp": e.destination_left_or_up.map(NodeId::index),
                    "destinationRightOrDown": e.destination_right_or_down.map(NodeId::index),
                })
            })
            .collect();
        let labeled_nodes: serde_json::Map<String, Value> = self
            .labeled_nodes
            .iter()
            .map(|(label, id)| (label.clone(), json!(id.0)))
            .collect();
        let labeled_edges: serde_json::Map<String, Value> = self
            .labeled_edges
            .iter()
            .map(|(label, id)| (label.clone(), json!(id.0)))
            .collect();

        json!({
            "nodes": nodes,
            "edges": edges,
            "labeledNodes": labeled_nodes,
            "labeledEdges": labeled_edges,
        })
    }
}

impl Index<NodeId> for Graph {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl Index<EdgeId> for Graph {
    type Output = Edge;

    fn index(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }
}
