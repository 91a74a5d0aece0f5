use skein::algorithms::{sink_fn, strongly_connected_components_with, ComponentLabels};
use skein::graph::degree::{in_degree, is_branch, is_leaf, is_root, out_degree};
use skein::graph::{AdjacencyList, EdgeListGraph, Graph, Transposed};
use skein::storage::{DefaultStorage, DenseMap, Reusable};
use skein::{strongly_connected_components, strongly_connected_components_vec, CapabilityError};

fn normalized(mut groups: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    for g in &mut groups {
        g.sort_unstable();
    }
    groups.sort();
    groups
}

#[test]
fn canonical_example() {
    let g = EdgeListGraph::directed_from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]);
    let mut groups = strongly_connected_components_vec(&g, 0).unwrap();
    for group in &mut groups {
        group.sort_unstable();
    }
    assert_eq!(groups, vec![vec![4], vec![1, 2, 3]]);

    let big = strongly_connected_components_vec(&g, 2).unwrap();
    assert_eq!(big.len(), 1);
    assert_eq!(big[0].len(), 3);
}

#[test]
fn transposition_preserves_components() {
    let g = AdjacencyList::from_edges(7, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3), (5, 6)])
        .with_in_edges();
    let forward = normalized(strongly_connected_components_vec(&g, 0).unwrap());
    let backward = normalized(strongly_connected_components_vec(&Transposed::new(&g), 0).unwrap());
    assert_eq!(forward, backward);
    assert_eq!(forward, vec![vec![0, 1, 2], vec![3, 4], vec![5], vec![6]]);
}

#[test]
fn labels_give_a_condensation_order() {
    let g = AdjacencyList::from_edges(
        8,
        [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3), (6, 7), (7, 6), (6, 0)],
    );
    let mut labels = ComponentLabels::new();
    strongly_connected_components(&g, &mut labels, 0).unwrap();
    assert_eq!(labels.component_count(), 3);

    for edge in g.edges() {
        let (tail, head) = (labels.label(&edge.tail).unwrap(), labels.label(&edge.head).unwrap());
        assert!(tail >= head, "edge {}->{} runs against emission order", edge.tail, edge.head);
    }
}

#[test]
fn reusable_storage_across_calls() {
    let graphs = [
        AdjacencyList::from_edges(3, [(0, 1), (1, 0), (1, 2)]),
        AdjacencyList::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]),
    ];
    let mut calls = Reusable::new(Vec::new);
    let mut stacks = Reusable::new(Vec::new);
    let mut sizes = Vec::new();
    for g in &graphs {
        strongly_connected_components_with(
            g,
            sink_fn(|group: Vec<usize>| sizes.push(group.len())),
            0,
            &mut calls,
            &mut stacks,
            DefaultStorage::<DenseMap<_>>::new(),
        )
        .unwrap();
    }
    assert_eq!(sizes, vec![1, 2, 4]);
}

#[test]
fn undirected_input_is_rejected() {
    let g = EdgeListGraph::undirected_from_edges([(1, 2)]);
    let mut sink: Vec<Vec<i32>> = Vec::new();
    let err = strongly_connected_components(&g, &mut sink, 0).unwrap_err();
    assert!(matches!(err, CapabilityError::Undirected { .. }));
    assert_eq!(
        err.to_string(),
        "`strongly_connected_components` is only defined for directed graphs"
    );
}

#[test]
fn degree_classification() {
    let g = EdgeListGraph::directed_from_edges([("src", "mid"), ("mid", "sink"), ("src", "sink")]);
    assert_eq!(out_degree(&g, &"src"), Ok(2));
    assert_eq!(in_degree(&g, &"sink"), Ok(2));
    assert_eq!(is_root(&g, &"src"), Ok(true));
    assert_eq!(is_branch(&g, &"mid"), Ok(true));
    assert_eq!(is_leaf(&g, &"sink"), Ok(true));
    assert_eq!(is_leaf(&g, &"src"), Ok(false));

    // Without an in-edge index the edge list stands in.
    let adj = AdjacencyList::from_edges(2, [(0, 1)]);
    assert_eq!(is_root(&adj, &1), Ok(false));
    assert_eq!(is_root(&adj.with_in_edges(), &0), Ok(true));

    let undirected = AdjacencyList::undirected_from_edges(2, [(0, 1)]);
    assert!(is_root(&undirected, &0).is_err());
}
