use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;
use skein::graph::AdjacencyList;
use skein::search::{depth_first_search, shortest_depths, visitor_for};
use skein::strongly_connected_components_vec;

fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..24).prop_flat_map(|n| (Just(n), proptest::collection::vec((0..n, 0..n), 0..n * 3)))
}

fn oracle(n: usize, edges: &[(usize, usize)]) -> DiGraph<(), ()> {
    let mut g = DiGraph::new();
    let nodes: Vec<NodeIndex> = (0..n).map(|_| g.add_node(())).collect();
    for &(u, v) in edges {
        g.add_edge(nodes[u], nodes[v], ());
    }
    g
}

fn normalized(groups: impl IntoIterator<Item = Vec<usize>>) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = groups
        .into_iter()
        .map(|mut g| {
            g.sort_unstable();
            g
        })
        .collect();
    groups.sort();
    groups
}

fn reachable(g: &AdjacencyList, from: usize) -> HashSet<usize> {
    shortest_depths(g, [from]).unwrap().into_iter().map(|(v, _)| v).collect()
}

proptest! {
    #[test]
    fn breadth_first_depths_match_unit_dijkstra((n, edges) in arb_graph()) {
        let g = AdjacencyList::from_edges(n, edges.iter().copied());
        let pg = oracle(n, &edges);

        let depths: HashMap<usize, usize> = shortest_depths(&g, [0]).unwrap().into_iter().collect();
        let expected = petgraph::algo::dijkstra(&pg, NodeIndex::new(0), None, |_| 1usize);

        prop_assert_eq!(depths.len(), expected.len());
        for (node, cost) in expected {
            prop_assert_eq!(depths.get(&node.index()).copied(), Some(cost));
        }
    }

    #[test]
    fn depth_first_reaches_the_same_vertices((n, edges) in arb_graph()) {
        let g = AdjacencyList::from_edges(n, edges.iter().copied());
        let mut seen = Vec::new();
        depth_first_search(&g, [0], visitor_for(&g).on_discover_vertex(|v| seen.push(*v.vertex))).unwrap();

        let unique: HashSet<usize> = seen.iter().copied().collect();
        prop_assert_eq!(unique.len(), seen.len());
        prop_assert_eq!(unique, reachable(&g, 0));
    }

    #[test]
    fn components_match_petgraph((n, edges) in arb_graph()) {
        let g = AdjacencyList::from_edges(n, edges.iter().copied());
        let ours = normalized(strongly_connected_components_vec(&g, 0).unwrap());
        let theirs = normalized(
            petgraph::algo::tarjan_scc(&oracle(n, &edges))
                .into_iter()
                .map(|group| group.into_iter().map(NodeIndex::index).collect()),
        );
        prop_assert_eq!(ours, theirs);
    }

    #[test]
    fn components_are_mutual_reachability_classes((n, edges) in arb_graph()) {
        let g = AdjacencyList::from_edges(n, edges.iter().copied());
        let groups = strongly_connected_components_vec(&g, 0).unwrap();
        let reach: Vec<HashSet<usize>> = (0..n).map(|v| reachable(&g, v)).collect();

        let mut label = vec![usize::MAX; n];
        for (i, group) in groups.iter().enumerate() {
            for &v in group {
                prop_assert_eq!(label[v], usize::MAX, "vertex {} emitted twice", v);
                label[v] = i;
            }
        }
        for u in 0..n {
            for v in 0..n {
                let mutual = reach[u].contains(&v) && reach[v].contains(&u);
                prop_assert_eq!(label[u] == label[v], mutual);
            }
        }
    }

    #[test]
    fn min_size_filters_without_reordering((n, edges) in arb_graph(), k in 0usize..5) {
        let g = AdjacencyList::from_edges(n, edges.iter().copied());
        let all = strongly_connected_components_vec(&g, 0).unwrap();
        let filtered = strongly_connected_components_vec(&g, k).unwrap();
        let expected: Vec<_> = all.into_iter().filter(|group| group.len() >= k).collect();
        prop_assert_eq!(filtered, expected);
    }
}
