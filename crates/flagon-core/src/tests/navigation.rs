use crate::*;

const CROSS: &str = "
   [N]
   |
[W]-[C]-[E]
    |
    [S]";

#[test]
fn neighbor_follows_each_side() {
    let graph = parse(CROSS).unwrap();
    let c = graph.node_by_label("C").unwrap();
    assert_eq!(graph.neighbor(c, Direction::Left), graph.node_by_label("W"));
    assert_eq!(graph.neighbor(c, Direction::Right), graph.node_by_label("E"));
    assert_eq!(graph.neighbor(c, Direction::Down), graph.node_by_label("S"));
    // The pipe under `N` is one column left of `C`.
    assert_eq!(graph.neighbor(c, Direction::Up), None);
}

#[test]
fn neighbors_lists_linked_sides_in_order() {
    let graph = parse(CROSS).unwrap();
    let c = graph.node_by_label("C").unwrap();
    let sides: Vec<_> = graph
        .neighbors(c)
        .into_iter()
        .map(|(direction, _, far)| (direction, graph[far].label()))
        .collect();
    assert_eq!(
        sides,
        vec![
            (Direction::Left, Some("W")),
            (Direction::Right, Some("E")),
            (Direction::Down, Some("S")),
        ]
    );
}

#[test]
fn neighbor_is_none_for_one_sided_edges() {
    let graph = parse("[A]--").unwrap();
    let a = graph.node_by_label("A").unwrap();
    assert!(graph[a].right().is_some());
    assert_eq!(graph.neighbor(a, Direction::Right), None);
    assert!(graph.neighbors(a).is_empty());
}

#[test]
fn coordinate_lookups_hit_brackets_and_run_ends() {
    let graph = parse(CROSS).unwrap();
    assert_eq!(graph.node_at(Position::new(4, 5)), graph.node_by_label("C"));
    assert_eq!(graph.node_at(Position::new(4, 6)), None);

    let dash = graph.edge_at(Position::new(4, 4)).unwrap();
    assert_eq!(graph[dash].orientation(), Orientation::Horizontal);
    assert_eq!(
        graph[dash].endpoints(),
        (graph.node_by_label("W"), graph.node_by_label("C"))
    );

    let pipe = graph.edge_at(Position::new(5, 5)).unwrap();
    assert_eq!(graph[pipe].orientation(), Orientation::Vertical);
    assert_eq!(graph.edge_at(Position::new(1, 1)), None);
}

#[test]
fn ids_index_the_arenas() {
    let graph = parse("[A]-[B]").unwrap();
    let ids: Vec<_> = graph.node_ids().map(NodeId::index).collect();
    assert_eq!(ids, vec![0, 1]);
    assert_eq!(graph.edge_ids().count(), 1);
    assert!(graph.node(NodeId(2)).is_none());
    assert!(graph.edge(EdgeId(0)).is_some());
    assert_eq!(graph[EdgeId(0)].position(), Position::new(1, 4));
}

#[test]
fn labeled_collections_keep_discovery_order() {
    let graph = parse("[Zed]-b-[Amy]-a-[Moe]").unwrap();
    let nodes: Vec<_> = graph.labeled_nodes().keys().map(String::as_str).collect();
    assert_eq!(nodes, vec!["Zed", "Amy", "Moe"]);
    let edges: Vec<_> = graph.labeled_edges().keys().map(String::as_str).collect();
    assert_eq!(edges, vec!["b", "a"]);
}

#[test]
fn graph_serializes_with_camel_case_fields() {
    let graph = parse("[A]-[B]").unwrap();
    let value = serde_json::to_value(&graph).unwrap();
    assert_eq!(value["labeledNodes"]["B"], 1);
    assert_eq!(value["nodes"][0]["rightColumn"], 3);
    assert_eq!(value["edges"][0]["orientation"], "horizontal");
    assert_eq!(value["edges"][0]["destinationRightOrDown"], 1);
}
