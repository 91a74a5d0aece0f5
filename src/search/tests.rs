use super::*;
use crate::graph::{AdjacencyList, EdgeListGraph};
use crate::storage::{Borrowed, SingleUse, Untracked};

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Visitor<AdjacencyList> for Recorder {
    type Error = core::convert::Infallible;

    fn begin_search(&mut self, _: &AdjacencyList) -> Result<SearchControl, Self::Error> {
        self.events.push("begin".into());
        Ok(SearchControl::Continue)
    }

    fn discover_vertex(&mut self, visit: &Visit<'_, AdjacencyList>) -> Result<Control, Self::Error> {
        self.events.push(format!("vertex {}@{}", visit.vertex, visit.depth));
        Ok(Control::Continue)
    }

    fn discover_branch(&mut self, visit: &Visit<'_, AdjacencyList>) -> Result<Control, Self::Error> {
        self.events.push(format!("branch {}", visit.vertex));
        Ok(Control::Continue)
    }

    fn discover_leaf(&mut self, visit: &Visit<'_, AdjacencyList>) -> Result<Control, Self::Error> {
        self.events.push(format!("leaf {}", visit.vertex));
        Ok(Control::Continue)
    }

    fn discover_new_edge(&mut self, e: &EdgeVisit<'_, AdjacencyList>) -> Result<Control, Self::Error> {
        self.events.push(format!("new {}->{}", e.edge.tail, e.edge.head));
        Ok(Control::Continue)
    }

    fn discover_seen_edge(&mut self, e: &EdgeVisit<'_, AdjacencyList>) -> Result<Control, Self::Error> {
        self.events.push(format!("seen {}->{}", e.edge.tail, e.edge.head));
        Ok(Control::Continue)
    }

    fn finish_vertex(&mut self, visit: &Visit<'_, AdjacencyList>) -> Result<SearchControl, Self::Error> {
        self.events.push(format!("finish {}", visit.vertex));
        Ok(SearchControl::Continue)
    }

    fn finish_search(&mut self, _: &AdjacencyList) -> Result<SearchControl, Self::Error> {
        self.events.push("end".into());
        Ok(SearchControl::Continue)
    }
}

fn diamond_with_loop() -> AdjacencyList {
    AdjacencyList::from_edges(3, [(0, 1), (0, 2), (1, 2), (2, 2)])
}

#[test]
fn breadth_first_hook_order() {
    let g = diamond_with_loop();
    let mut rec = Recorder::default();
    let outcome = breadth_first_search(&g, [0], &mut rec).unwrap();
    assert_eq!(outcome, SearchOutcome::Finished);
    assert_eq!(
        rec.events,
        [
            "begin", "vertex 0@0", "branch 0", "new 0->1", "new 0->2", "finish 0", "vertex 1@1",
            "branch 1", "seen 1->2", "finish 1", "vertex 2@1", "branch 2", "seen 2->2", "finish 2",
            "end",
        ]
    );
}

#[test]
fn depth_first_expands_latest_discovery() {
    let g = diamond_with_loop();
    let mut order = Vec::new();
    let visitor = visitor_for(&g).on_discover_vertex(|v| order.push(*v.vertex));
    depth_first_search(&g, [0], visitor).unwrap();
    assert_eq!(order, vec![0, 2, 1]);
}

#[test]
fn leaves_and_branches_only_on_directed_graphs() {
    let directed = AdjacencyList::from_edges(2, [(0, 1)]);
    let mut rec = Recorder::default();
    breadth_first_search(&directed, [0], &mut rec).unwrap();
    assert!(rec.events.contains(&"leaf 1".to_string()));

    let undirected = AdjacencyList::undirected_from_edges(2, [(0, 1)]);
    let mut rec = Recorder::default();
    breadth_first_search(&undirected, [0], &mut rec).unwrap();
    assert!(!rec.events.iter().any(|e| e.starts_with("leaf") || e.starts_with("branch")));
    assert!(rec.events.contains(&"seen 1->0".to_string()));
}

#[test]
fn stop_tree_on_vertex_skips_expansion() {
    let g = AdjacencyList::from_edges(3, [(0, 1), (1, 2)]);
    let mut finished = Vec::new();
    let mut seen = Vec::new();
    let visitor = visitor_for(&g)
        .on_discover_vertex(|v| {
            seen.push(*v.vertex);
            if *v.vertex == 1 {
                Control::StopTree
            } else {
                Control::Continue
            }
        })
        .on_finish_vertex(|v| finished.push(*v.vertex));
    let outcome = breadth_first_search(&g, [0], visitor).unwrap();
    assert_eq!(outcome, SearchOutcome::Finished);
    assert_eq!(seen, vec![0, 1]);
    assert_eq!(finished, vec![0]);
}

#[test]
fn stop_tree_on_edge_leaves_head_reachable_elsewhere() {
    let g = AdjacencyList::from_edges(3, [(0, 1), (0, 2), (2, 1)]);
    let depths = {
        let mut depths = Vec::new();
        let visitor = visitor_for(&g)
            .on_discover_new_edge(|e| {
                if (e.edge.tail, e.edge.head) == (0, 1) {
                    Control::StopTree
                } else {
                    Control::Continue
                }
            })
            .on_discover_vertex(|v| depths.push((*v.vertex, v.depth)));
        breadth_first_search(&g, [0], visitor).unwrap();
        depths
    };
    assert_eq!(depths, vec![(0, 0), (2, 1), (1, 2)]);
}

#[test]
fn stop_search_from_each_location() {
    let g = diamond_with_loop();

    let outcome = breadth_first_search(
        &g,
        [0],
        visitor_for(&g).on_begin_search(|_| SearchControl::Stop),
    )
    .unwrap();
    assert_eq!(outcome, SearchOutcome::Stopped);

    let mut after = 0;
    let outcome = breadth_first_search(
        &g,
        [0],
        visitor_for(&g)
            .on_discover_seen_edge(|_| Control::StopSearch)
            .on_discover_vertex(|_| after += 1),
    )
    .unwrap();
    assert_eq!(outcome, SearchOutcome::Stopped);
    assert_eq!(after, 2);

    let outcome = breadth_first_search(
        &g,
        [0],
        visitor_for(&g).on_finish_vertex(|_| SearchControl::Stop),
    )
    .unwrap();
    assert_eq!(outcome, SearchOutcome::Stopped);

    let outcome = breadth_first_search(
        &g,
        [0],
        visitor_for(&g).on_finish_search(|_| SearchControl::Stop),
    )
    .unwrap();
    assert_eq!(outcome, SearchOutcome::Stopped);
}

#[test]
fn visitor_error_aborts_the_search() {
    let g = AdjacencyList::from_edges(3, [(0, 1), (1, 2)]);
    let mut discovered = 0;
    let visitor = fallible_visitor_for::<&'static str, _>(&g).on_discover_vertex(|v| {
        discovered += 1;
        if *v.vertex == 1 {
            Err("boom")
        } else {
            Ok(Control::Continue)
        }
    });
    let err = breadth_first_search(&g, [0], visitor).unwrap_err();
    assert_eq!(err.into_visitor_error(), Some("boom"));
    assert_eq!(discovered, 2);
}

#[test]
fn duplicate_roots_are_seeded_once() {
    let g = AdjacencyList::from_edges(2, [(0, 1)]);
    let depths = shortest_depths(&g, [1, 0, 1]).unwrap();
    assert_eq!(depths, vec![(1, 0), (0, 0)]);
}

#[test]
fn untracked_mode_revisits_through_every_path() {
    let g = AdjacencyList::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);
    let mut hits = Vec::new();
    let visitor = visitor_for(&g).on_discover_vertex(|v| hits.push(*v.vertex));
    breadth_first_search_with(
        &g,
        [0],
        visitor,
        SingleUse::new(VecDeque::new()),
        SingleUse::new(Untracked),
    )
    .unwrap();
    assert_eq!(hits, vec![0, 1, 2, 3, 3]);
}

#[test]
fn borrowed_visited_set_outlives_the_call() {
    let g = EdgeListGraph::directed_from_edges([(1, 2), (2, 3), (4, 5)]);
    let mut visited = HashSet::new();
    visited.insert(crate::graph::Keyed::new(99));
    depth_first_search_with(
        &g,
        [1],
        visitor_for(&g),
        DefaultStorage::<Vec<_>>::new(),
        Borrowed::new(&mut visited),
    )
    .unwrap();
    let mut members: Vec<i32> = visited.iter().map(|k| *k.vertex()).collect();
    members.sort_unstable();
    assert_eq!(members, vec![1, 2, 3]);
}

#[test]
fn traverse_accepts_any_frontier() {
    let g = diamond_with_loop();
    let mut order = Vec::new();
    traverse(
        &g,
        [0],
        visitor_for(&g).on_discover_vertex(|v| order.push(*v.vertex)),
        DefaultStorage::<Vec<GraphPending<AdjacencyList>>>::new(),
        DefaultStorage::<HashSet<VertexKey<AdjacencyList>>>::new(),
    )
    .unwrap();
    assert_eq!(order, vec![0, 2, 1]);
}

fn signal_on_classification(target: usize, signal: Control) -> (SearchOutcome, Vec<usize>, Vec<usize>) {
    // 0 and 1 are branches, 2 and 3 are leaves.
    let g = AdjacencyList::from_edges(4, [(0, 1), (1, 2), (0, 3)]);
    let mut discovered = Vec::new();
    let mut finished = Vec::new();
    let pick = move |v: &Visit<'_, AdjacencyList>| {
        if *v.vertex == target {
            signal
        } else {
            Control::Continue
        }
    };
    let visitor = visitor_for(&g)
        .on_discover_vertex(|v| discovered.push(*v.vertex))
        .on_discover_branch(pick)
        .on_discover_leaf(pick)
        .on_finish_vertex(|v| finished.push(*v.vertex));
    let outcome = breadth_first_search(&g, [0], visitor).unwrap();
    (outcome, discovered, finished)
}

#[test]
fn stop_tree_on_branch_skips_expansion_and_finish() {
    let (outcome, discovered, finished) = signal_on_classification(1, Control::StopTree);
    assert_eq!(outcome, SearchOutcome::Finished);
    assert_eq!(discovered, vec![0, 1, 3]);
    assert_eq!(finished, vec![0, 3]);
}

#[test]
fn stop_tree_on_leaf_skips_finish() {
    let (outcome, discovered, finished) = signal_on_classification(3, Control::StopTree);
    assert_eq!(outcome, SearchOutcome::Finished);
    assert_eq!(discovered, vec![0, 1, 3, 2]);
    assert_eq!(finished, vec![0, 1, 2]);
}

#[test]
fn stop_search_on_branch() {
    let (outcome, discovered, finished) = signal_on_classification(1, Control::StopSearch);
    assert_eq!(outcome, SearchOutcome::Stopped);
    assert_eq!(discovered, vec![0, 1]);
    assert_eq!(finished, vec![0]);
}

#[test]
fn stop_search_on_leaf() {
    let (outcome, discovered, finished) = signal_on_classification(3, Control::StopSearch);
    assert_eq!(outcome, SearchOutcome::Stopped);
    assert_eq!(discovered, vec![0, 1, 3]);
    assert_eq!(finished, vec![0, 1]);
}
