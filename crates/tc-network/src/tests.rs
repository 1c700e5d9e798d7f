//! Unit tests for tc-network.
//!
//! All tests build small hand-placed cities; coordinates are chosen so edge
//! costs are easy to compute by hand (cost = floor(distance × 10)).

#[cfg(test)]
mod helpers {
    use tc_core::{Category, NodeId, SimConfig};
    use crate::{NetworkGraph, NodeSpec};

    pub const WORK: Category = Category(1);

    /// A graph holding one work node per position, with `budget` to spend.
    pub fn graph_with(positions: &[(i32, i32)], budget: i64) -> (NetworkGraph, Vec<NodeId>) {
        graph_with_config(positions, budget, SimConfig::default())
    }

    pub fn graph_with_config(
        positions: &[(i32, i32)],
        budget:    i64,
        config:    SimConfig,
    ) -> (NetworkGraph, Vec<NodeId>) {
        let mut g = NetworkGraph::new(config);
        let ids = positions
            .iter()
            .map(|&(x, y)| g.add_node(NodeSpec::work(WORK, x, y)))
            .collect();
        g.credit(budget);
        (g, ids)
    }
}

// ── Edges ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod edges {
    use tc_core::{NodeId, SimConfig};
    use super::helpers::{graph_with, graph_with_config};
    use crate::{Rejection, RejectionKind};

    #[test]
    fn create_debits_floor_of_scaled_distance() {
        let (mut g, n) = graph_with(&[(0, 0), (1, 1)], 1_000);
        g.create_edge(n[0], n[1]).unwrap();
        // sqrt(2) × 10 = 14.14… → 14
        assert_eq!(g.budget(), 1_000 - 14);
        assert_eq!(g.edges().len(), 1);
        assert_eq!(g.edges()[0].capacity, 1);
        assert_eq!(g.node(n[0]).unwrap().remaining_slots, 4);
        assert_eq!(g.node(n[1]).unwrap().remaining_slots, 4);
    }

    #[test]
    fn lookup_works_in_either_order() {
        let (mut g, n) = graph_with(&[(0, 0), (3, 4)], 1_000);
        g.create_edge(n[1], n[0]).unwrap();
        assert!(g.edge_between(n[0], n[1]).is_some());
        assert!(g.edge_between(n[1], n[0]).is_some());
        assert_eq!(g.incident_edges(n[0]).count(), 1);
        assert_eq!(g.incident_edges(n[1]).count(), 1);
    }

    #[test]
    fn missing_node_rejected() {
        let (mut g, n) = graph_with(&[(0, 0)], 1_000);
        assert_eq!(g.create_edge(n[0], NodeId(9)), Err(Rejection::NodeNotFound(NodeId(9))));
        assert_eq!(
            g.create_edge(NodeId::INVALID, n[0]).unwrap_err().kind(),
            RejectionKind::NotFound
        );
    }

    #[test]
    fn self_loop_rejected() {
        let (mut g, n) = graph_with(&[(0, 0)], 1_000);
        assert_eq!(g.create_edge(n[0], n[0]), Err(Rejection::SelfLoop(n[0])));
    }

    #[test]
    fn duplicate_rejected_in_both_orders() {
        let (mut g, n) = graph_with(&[(0, 0), (5, 0)], 1_000);
        g.create_edge(n[0], n[1]).unwrap();
        assert_eq!(g.create_edge(n[0], n[1]).unwrap_err().kind(), RejectionKind::Duplicate);
        assert_eq!(g.create_edge(n[1], n[0]).unwrap_err().kind(), RejectionKind::Duplicate);
        assert_eq!(g.budget(), 1_000 - 50);
    }

    #[test]
    fn slots_exhausted() {
        let config = SimConfig { max_edges_per_node: 1, ..SimConfig::default() };
        let (mut g, n) = graph_with_config(&[(0, 0), (1, 0), (0, 1)], 1_000, config);
        g.create_edge(n[0], n[1]).unwrap();
        assert_eq!(g.create_edge(n[0], n[2]), Err(Rejection::SlotsExhausted(n[0])));
        assert_eq!(g.create_edge(n[2], n[1]), Err(Rejection::SlotsExhausted(n[1])));
    }

    #[test]
    fn node_on_segment_rejected() {
        let (mut g, n) = graph_with(&[(0, 0), (2, 0), (4, 0)], 1_000);
        assert_eq!(
            g.create_edge(n[0], n[2]),
            Err(Rejection::NodeOnSegment { a: n[0], b: n[2], node: n[1] })
        );
        // The two halves are fine.
        g.create_edge(n[0], n[1]).unwrap();
        g.create_edge(n[1], n[2]).unwrap();
    }

    #[test]
    fn crossing_edges_rejected() {
        let (mut g, n) = graph_with(&[(0, 0), (4, 4), (0, 4), (4, 0)], 10_000);
        g.create_edge(n[0], n[1]).unwrap();
        let err = g.create_edge(n[2], n[3]).unwrap_err();
        assert_eq!(err.kind(), RejectionKind::GeometryConflict);
        assert_eq!(g.edges().len(), 1);
    }

    #[test]
    fn edges_sharing_an_endpoint_do_not_cross() {
        let (mut g, n) = graph_with(&[(0, 0), (4, 0), (0, 4), (4, 4)], 10_000);
        g.create_edge(n[0], n[1]).unwrap();
        g.create_edge(n[0], n[2]).unwrap();
        g.create_edge(n[0], n[3]).unwrap();
        g.create_edge(n[1], n[3]).unwrap();
        assert_eq!(g.edges().len(), 4);
    }

    #[test]
    fn geometry_checked_before_budget() {
        let (mut g, n) = graph_with(&[(0, 0), (2, 0), (4, 0)], 0);
        assert_eq!(
            g.create_edge(n[0], n[2]).unwrap_err().kind(),
            RejectionKind::GeometryConflict
        );
    }

    #[test]
    fn insufficient_budget_leaves_graph_untouched() {
        let (mut g, n) = graph_with(&[(0, 0), (10, 0)], 99);
        assert_eq!(
            g.create_edge(n[0], n[1]),
            Err(Rejection::InsufficientBudget { needed: 100, available: 99 })
        );
        assert_eq!(g.budget(), 99);
        assert!(g.edges().is_empty());
        assert_eq!(g.node(n[0]).unwrap().remaining_slots, 5);
    }

    #[test]
    fn upgrade_cost_grows_with_capacity() {
        let (mut g, n) = graph_with(&[(0, 0), (10, 0)], 10_000);
        g.create_edge(n[0], n[1]).unwrap(); // 100
        g.upgrade_edge(n[1], n[0]).unwrap(); // 2 × 100
        g.upgrade_edge(n[0], n[1]).unwrap(); // 3 × 100
        assert_eq!(g.edge_between(n[0], n[1]).unwrap().capacity, 3);
        assert_eq!(g.budget(), 10_000 - 100 - 200 - 300);
    }

    #[test]
    fn upgrade_missing_edge_or_budget() {
        let (mut g, n) = graph_with(&[(0, 0), (10, 0)], 250);
        assert_eq!(
            g.upgrade_edge(n[0], n[1]),
            Err(Rejection::EdgeNotFound { a: n[0], b: n[1] })
        );
        g.create_edge(n[0], n[1]).unwrap();
        assert_eq!(
            g.upgrade_edge(n[0], n[1]),
            Err(Rejection::InsufficientBudget { needed: 200, available: 150 })
        );
        assert_eq!(g.edge_between(n[0], n[1]).unwrap().capacity, 1);
    }
}

// ── Shortcuts ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod shortcuts {
    use tc_core::NodeId;
    use super::helpers::graph_with;
    use crate::{Rejection, RejectionKind, Shortcut};

    #[test]
    fn create_marks_both_endpoints() {
        let (mut g, n) = graph_with(&[(0, 0), (50, 50)], 6_000);
        g.create_shortcut(n[0], n[1]).unwrap();
        assert_eq!(g.budget(), 1_000);
        assert!(g.node(n[0]).unwrap().has_shortcut);
        assert!(g.node(n[1]).unwrap().has_shortcut);
        let expected = Shortcut { entry: n[0], exit: n[1] };
        assert_eq!(g.shortcut_at(n[1]), Some(expected));
        assert_eq!(g.shortcut_between(n[0], n[1]), Some(expected));
        assert_eq!(g.shortcut_between(n[1], n[0]), None);
        assert_eq!(g.shortcut_exit(n[0]), Some(n[1]));
        assert_eq!(g.shortcut_exit(n[1]), None);
    }

    #[test]
    fn one_shortcut_per_node_in_either_direction() {
        let (mut g, n) = graph_with(&[(0, 0), (5, 5), (9, 0)], 50_000);
        g.create_shortcut(n[0], n[1]).unwrap();
        assert_eq!(g.create_shortcut(n[2], n[0]), Err(Rejection::AlreadyHasShortcut(n[0])));
        assert_eq!(g.create_shortcut(n[2], n[1]), Err(Rejection::AlreadyHasShortcut(n[1])));
        assert_eq!(g.shortcuts().len(), 1);
    }

    #[test]
    fn validation_precedes_budget() {
        let (mut g, n) = graph_with(&[(0, 0), (5, 5)], 0);
        assert_eq!(g.create_shortcut(n[0], NodeId(7)), Err(Rejection::NodeNotFound(NodeId(7))));
        assert_eq!(g.create_shortcut(n[0], n[0]), Err(Rejection::SelfLoop(n[0])));
        assert_eq!(
            g.create_shortcut(n[0], n[1]).unwrap_err().kind(),
            RejectionKind::InsufficientBudget
        );
        assert!(!g.node(n[0]).unwrap().has_shortcut);
    }
}

// ── Pods ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pods {
    use tc_core::{NodeId, PodId, SimConfig};
    use super::helpers::{graph_with, graph_with_config};
    use crate::{Rejection, RejectionKind, TransportUnit};

    #[test]
    fn create_and_destroy() {
        let (mut g, n) = graph_with(&[(0, 0), (1, 0)], 2_000);
        g.create_edge(n[0], n[1]).unwrap(); // 10
        g.create_pod(PodId(3), vec![n[0], n[1], n[0]]).unwrap();
        assert_eq!(g.budget(), 2_000 - 10 - 1_000);
        assert_eq!(g.pod(PodId(3)).unwrap().route(), &[n[0], n[1], n[0]]);

        g.destroy_pod(PodId(3)).unwrap();
        assert_eq!(g.budget(), 2_000 - 10 - 1_000 + 750);
        assert_eq!(g.destroy_pod(PodId(3)), Err(Rejection::PodNotFound(PodId(3))));
    }

    #[test]
    fn duplicate_and_out_of_range_ids() {
        let (mut g, n) = graph_with(&[(0, 0)], 10_000);
        g.create_pod(PodId(500), vec![n[0]]).unwrap();
        assert_eq!(g.create_pod(PodId(500), vec![n[0]]), Err(Rejection::DuplicatePod(PodId(500))));
        assert_eq!(
            g.create_pod(PodId(501), vec![n[0]]).unwrap_err().kind(),
            RejectionKind::IdOutOfRange
        );
        assert_eq!(
            g.create_pod(PodId::INVALID, vec![n[0]]).unwrap_err().kind(),
            RejectionKind::IdOutOfRange
        );
    }

    #[test]
    fn route_validation() {
        let (mut g, n) = graph_with(&[(0, 0), (1, 0), (2, 2)], 10_000);
        g.create_edge(n[0], n[1]).unwrap();
        assert_eq!(g.create_pod(PodId(1), vec![]), Err(Rejection::EmptyRoute(PodId(1))));
        assert_eq!(
            g.create_pod(PodId(1), vec![n[0], NodeId(42)]),
            Err(Rejection::NodeNotFound(NodeId(42)))
        );
        assert_eq!(
            g.create_pod(PodId(1), vec![n[0], n[1], n[2]]),
            Err(Rejection::NoPath { from: n[1], to: n[2] })
        );
        assert_eq!(g.pod_count(), 0);
    }

    #[test]
    fn pod_costs_flat_amount() {
        let (mut g, n) = graph_with(&[(0, 0)], 999);
        assert_eq!(
            g.create_pod(PodId(0), vec![n[0]]),
            Err(Rejection::InsufficientBudget { needed: 1_000, available: 999 })
        );
    }

    #[test]
    fn long_routes_are_truncated() {
        let config = SimConfig { days_per_month: 3, ..SimConfig::default() };
        let (mut g, n) = graph_with_config(&[(0, 0), (1, 0)], 10_000, config);
        g.create_edge(n[0], n[1]).unwrap();
        let route = vec![n[0], n[1], n[0], n[1], n[0], n[1]];
        g.create_pod(PodId(0), route).unwrap();
        assert_eq!(g.pod(PodId(0)).unwrap().route().len(), 4);

        // A route of exactly days + 1 stops is kept whole.
        let pod = TransportUnit::new(PodId(1), vec![n[0], n[1], n[0], n[1]], 4, 10);
        assert_eq!(pod.route().len(), 4);
    }

    #[test]
    fn cyclic_route_wraps_to_start() {
        let (a, b, c) = (NodeId(0), NodeId(1), NodeId(2));
        let mut pod = TransportUnit::new(PodId(0), vec![a, b, c, a], 21, 10);
        assert!(pod.is_cyclic());
        let mut visited = vec![pod.current_stop().unwrap()];
        for _ in 0..6 {
            pod.advance();
            visited.push(pod.current_stop().unwrap());
        }
        assert_eq!(visited, vec![a, b, c, a, b, c, a]);
        assert_eq!(pod.current_index(), 0);
    }

    #[test]
    fn linear_route_stops_at_the_end() {
        let (a, b) = (NodeId(0), NodeId(1));
        let mut pod = TransportUnit::new(PodId(0), vec![a, b], 21, 10);
        assert!(!pod.is_cyclic());
        assert_eq!(pod.next_stop(), Some(b));
        pod.advance();
        assert_eq!(pod.current_stop(), Some(b));
        assert_eq!(pod.next_stop(), None);
    }

    #[test]
    fn boarding_consumes_seats() {
        let mut pod = TransportUnit::new(PodId(0), vec![NodeId(0)], 21, 2);
        assert!(pod.board());
        assert!(pod.board());
        assert!(!pod.board());
        pod.reset_capacity();
        assert_eq!(pod.remaining_capacity, 2);
    }

    #[test]
    fn reset_pods_restores_start_and_seats() {
        let (mut g, n) = graph_with(&[(0, 0), (1, 0)], 10_000);
        g.create_edge(n[0], n[1]).unwrap();
        g.create_pod(PodId(0), vec![n[0], n[1]]).unwrap();
        let pod = g.pod_mut(PodId(0)).unwrap();
        pod.advance();
        pod.board();
        g.reset_pods();
        let pod = g.pod(PodId(0)).unwrap();
        assert_eq!(pod.current_index(), 0);
        assert_eq!(pod.remaining_capacity, 10);
    }
}

// ── Requests and budget invariant ─────────────────────────────────────────────

#[cfg(test)]
mod requests {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use tc_core::geo::{lies_on_segment, segments_cross};
    use tc_core::{NodeId, PodId};
    use super::helpers::graph_with;
    use crate::{ConstructionRequest, NetworkGraph};

    #[test]
    fn apply_dispatches_each_kind() {
        let (mut g, n) = graph_with(&[(0, 0), (1, 0), (9, 9)], 20_000);
        g.apply(ConstructionRequest::Edge { a: n[0], b: n[1] }).unwrap();
        g.apply(ConstructionRequest::Upgrade { a: n[1], b: n[0] }).unwrap();
        g.apply(ConstructionRequest::Shortcut { entry: n[1], exit: n[2] }).unwrap();
        g.apply(ConstructionRequest::Pod { id: PodId(1), route: vec![n[0], n[1]] }).unwrap();
        g.apply(ConstructionRequest::Destroy { id: PodId(1) }).unwrap();
        assert_eq!(g.budget(), 20_000 - 10 - 20 - 5_000 - 1_000 + 750);
    }

    #[test]
    fn display_matches_command_syntax() {
        let req = ConstructionRequest::Pod { id: PodId(4), route: vec![NodeId(1), NodeId(2)] };
        assert_eq!(req.to_string(), "POD 4 1 2");
        assert_eq!(ConstructionRequest::Destroy { id: PodId(4) }.to_string(), "DESTROY 4");
    }

    /// Independent cost model used to check the graph's bookkeeping.
    fn expected_cost(g: &NetworkGraph, req: &ConstructionRequest) -> i64 {
        let base = |a: NodeId, b: NodeId| {
            let (pa, pb) = (g.node(a).unwrap().pos, g.node(b).unwrap().pos);
            (pa.distance(pb) * 10.0).floor() as i64
        };
        match req {
            ConstructionRequest::Edge { a, b } => base(*a, *b),
            ConstructionRequest::Upgrade { a, b } => {
                (g.edge_between(*a, *b).unwrap().capacity as i64 + 1) * base(*a, *b)
            }
            ConstructionRequest::Shortcut { .. } => 5_000,
            ConstructionRequest::Pod { .. } => 1_000,
            ConstructionRequest::Destroy { .. } => -750,
        }
    }

    #[test]
    fn random_requests_keep_budget_and_geometry_invariants() {
        let mut rng = SmallRng::seed_from_u64(7);
        let positions: Vec<(i32, i32)> =
            (0..25).map(|_| (rng.gen_range(0..40), rng.gen_range(0..25))).collect();
        let initial = 60_000;
        let (mut g, n) = graph_with(&positions, initial);

        let mut spent = 0i64;
        for _ in 0..600 {
            let a = n[rng.gen_range(0..n.len())];
            let b = n[rng.gen_range(0..n.len())];
            let req = match rng.gen_range(0..5) {
                0 | 1 => ConstructionRequest::Edge { a, b },
                2 => ConstructionRequest::Upgrade { a, b },
                3 => ConstructionRequest::Shortcut { entry: a, exit: b },
                _ => {
                    if rng.gen_bool(0.7) {
                        ConstructionRequest::Pod { id: PodId(rng.gen_range(0..8)), route: vec![a, b] }
                    } else {
                        ConstructionRequest::Destroy { id: PodId(rng.gen_range(0..8)) }
                    }
                }
            };
            let before = g.budget();
            let cost = match &req {
                ConstructionRequest::Upgrade { a, b } if g.edge_between(*a, *b).is_none() => 0,
                _ => expected_cost(&g, &req),
            };
            match g.apply(req) {
                Ok(()) => {
                    spent += cost;
                    assert_eq!(g.budget(), before - cost);
                }
                Err(_) => assert_eq!(g.budget(), before),
            }
            assert!(g.budget() >= 0);
        }
        assert_eq!(g.budget(), initial - spent);

        // No accepted edge passes through a third node or crosses another.
        let pos = |id: NodeId| g.node(id).unwrap().pos;
        for (i, e) in g.edges().iter().enumerate() {
            for node in g.nodes() {
                if node.id != e.a && node.id != e.b {
                    assert!(!lies_on_segment(node.pos, pos(e.a), pos(e.b)));
                }
            }
            for f in &g.edges()[i + 1..] {
                assert!(!segments_cross(pos(e.a), pos(e.b), pos(f.a), pos(f.b)));
            }
        }
    }
}

// ── PathOracle ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod oracle {
    use tc_core::{Category, SimConfig};
    use crate::oracle::single_source_hops;
    use crate::{NetworkGraph, NodeSpec, PathOracle};

    const RED: Category = Category(1);
    const BLUE: Category = Category(2);

    /// A(0,0) - B(1,0) - C(2,0), with C the only BLUE node.
    fn line() -> (NetworkGraph, [tc_core::NodeId; 3]) {
        let mut g = NetworkGraph::new(SimConfig::default());
        let a = g.add_node(NodeSpec::arrival(0, 0, vec![BLUE]));
        let b = g.add_node(NodeSpec::work(RED, 1, 0));
        let c = g.add_node(NodeSpec::work(BLUE, 2, 0));
        g.credit(100_000);
        g.create_edge(a, b).unwrap();
        g.create_edge(b, c).unwrap();
        (g, [a, b, c])
    }

    #[test]
    fn hop_counts_without_shortcut() {
        let (g, [a, b, c]) = line();
        let oracle = PathOracle::compute(&g);
        assert_eq!(oracle.distance(a, BLUE), Some(2));
        assert_eq!(oracle.distance(b, BLUE), Some(1));
        assert_eq!(oracle.distance(c, BLUE), Some(0));
        assert_eq!(oracle.distance(c, Category::ARRIVAL), Some(2));
    }

    #[test]
    fn shortcut_is_free_and_beats_edges() {
        let (mut g, [a, _, c]) = line();
        g.create_shortcut(a, c).unwrap();
        let oracle = PathOracle::compute(&g);
        assert_eq!(oracle.distance(a, BLUE), Some(0));
        assert_ne!(oracle.distance(a, BLUE), Some(2));
    }

    #[test]
    fn shortcut_is_one_directional() {
        let (mut g, [a, _, c]) = line();
        g.create_shortcut(a, c).unwrap();
        let oracle = PathOracle::compute(&g);
        // Travelling from C back to A must use the edges.
        assert_eq!(oracle.distance(c, Category::ARRIVAL), Some(2));
    }

    #[test]
    fn shortcut_exit_waits_its_turn_in_the_queue() {
        // S reaches A then X at one hop; A reaches B at two.  X's shortcut
        // exit E gets distance 1 but is queued behind B, so B claims W first
        // and W keeps 3 even though S → X ⇒ E → W is two hops.
        let mut g = NetworkGraph::new(SimConfig::default());
        let s = g.add_node(NodeSpec::work(RED, 0, 0));
        let a = g.add_node(NodeSpec::work(RED, 0, 2));
        let b = g.add_node(NodeSpec::work(RED, 0, 4));
        let x = g.add_node(NodeSpec::work(RED, 2, 0));
        let e = g.add_node(NodeSpec::work(RED, 10, 0));
        let w = g.add_node(NodeSpec::work(BLUE, 5, 5));
        g.credit(100_000);
        g.create_edge(s, a).unwrap();
        g.create_edge(s, x).unwrap();
        g.create_edge(a, b).unwrap();
        g.create_edge(b, w).unwrap();
        g.create_edge(e, w).unwrap();
        g.create_shortcut(x, e).unwrap();

        let hops = single_source_hops(&g, s);
        assert_eq!(hops[e.index()], Some(1));
        assert_eq!(hops[w.index()], Some(3));
        assert_eq!(PathOracle::compute(&g).distance(s, BLUE), Some(3));
    }

    #[test]
    fn unreachable_category_is_absent() {
        let mut g = NetworkGraph::new(SimConfig::default());
        let a = g.add_node(NodeSpec::arrival(0, 0, vec![BLUE]));
        let _ = g.add_node(NodeSpec::work(BLUE, 5, 5));
        let oracle = PathOracle::compute(&g);
        assert_eq!(oracle.distance(a, BLUE), None);
        assert_eq!(oracle.distance(a, Category::ARRIVAL), Some(0));
    }

    #[test]
    fn unknown_node_is_absent() {
        let oracle = PathOracle::empty();
        assert_eq!(oracle.distance(tc_core::NodeId(3), BLUE), None);
    }

    #[test]
    fn recompute_is_idempotent() {
        let (mut g, [a, _, c]) = line();
        g.create_shortcut(c, a).unwrap();
        let mut oracle = PathOracle::compute(&g);
        let first = oracle.clone();
        oracle.recompute(&g);
        assert_eq!(oracle, first);
        assert_eq!(oracle.node_count(), 3);
    }
}
