use topoviz_layout::{Algorithm, Edge, Error, Graph, LglOptions, Node, layout};

fn ring(n: usize) -> Graph {
    Graph {
        nodes: (0..n).map(|i| Node::new(format!("n{i}"))).collect(),
        edges: (0..n)
            .map(|i| Edge::new(format!("e{i}"), format!("n{i}"), format!("n{}", (i + 1) % n)))
            .collect(),
    }
}

fn dist(a: topoviz_layout::Point, b: topoviz_layout::Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

#[test]
fn lgl_is_deterministic_for_a_seed() {
    let g = ring(12);
    let algo = || {
        Algorithm::Lgl(LglOptions {
            random_seed: 5,
            ..Default::default()
        })
    };
    let a = layout(&g, algo()).expect("layout");
    let b = layout(&g, algo()).expect("layout");
    assert_eq!(a.positions, b.positions);
}

#[test]
fn lgl_places_every_node_at_a_finite_distinct_position() {
    let mut g = ring(10);
    // a second component and an isolated node
    g.nodes.push(Node::new("x0"));
    g.nodes.push(Node::new("x1"));
    g.nodes.push(Node::new("lonely"));
    g.edges.push(Edge::new("ex", "x0", "x1"));

    let res = layout(&g, "lgl".parse().expect("lgl")).expect("layout");
    assert_eq!(res.positions.len(), 13);
    let pts: Vec<_> = res.positions.values().copied().collect();
    for p in &pts {
        assert!(p.x.is_finite() && p.y.is_finite(), "non-finite position {p:?}");
    }
    for i in 0..pts.len() {
        for j in (i + 1)..pts.len() {
            assert!(dist(pts[i], pts[j]) > 1e-6, "nodes {i} and {j} coincide");
        }
    }
}

#[test]
fn adjacent_nodes_end_up_closer_than_non_adjacent_ones() {
    let n = 8;
    let g = ring(n);
    for (name, seed) in [("lgl", 0), ("lgl", 3), ("fr", 0)] {
        let algo = name.parse::<Algorithm>().expect("known").with_seed(seed);
        let res = layout(&g, algo).expect("layout");
        let p = |i: usize| res.get(&format!("n{i}")).expect("position");

        let mut adjacent = Vec::new();
        let mut other = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let d = dist(p(i), p(j));
                if j == i + 1 || (i == 0 && j == n - 1) {
                    adjacent.push(d);
                } else {
                    other.push(d);
                }
            }
        }
        let mean = |v: &[f64]| v.iter().sum::<f64>() / v.len() as f64;
        assert!(
            mean(&adjacent) < mean(&other),
            "{name}/{seed}: adjacent mean {} >= non-adjacent mean {}",
            mean(&adjacent),
            mean(&other)
        );
    }
}

#[test]
fn lgl_root_must_exist() {
    let algo = Algorithm::Lgl(LglOptions {
        root: Some("missing".to_string()),
        ..Default::default()
    });
    let err = layout(&ring(3), algo).unwrap_err();
    assert!(matches!(err, Error::UnknownRoot { ref node_id } if node_id == "missing"));
}

#[test]
fn invalid_graphs_are_rejected() {
    let mut g = ring(3);
    g.edges.push(Edge::new("bad", "n0", "ghost"));
    assert!(matches!(
        layout(&g, Algorithm::Circle).unwrap_err(),
        Error::MissingEndpoint { ref edge_id } if edge_id == "bad"
    ));

    let mut g = ring(3);
    g.nodes.push(Node::new("n1"));
    assert!(matches!(
        layout(&g, "lgl".parse().expect("lgl")).unwrap_err(),
        Error::DuplicateNode { ref node_id } if node_id == "n1"
    ));
}

#[test]
fn empty_graph_has_no_positions() {
    for name in ["lgl", "fr", "circle", "grid", "random", "auto"] {
        let res = layout(&Graph::default(), name.parse().expect("known")).expect("layout");
        assert!(res.positions.is_empty(), "{name}");
    }
}

#[test]
fn circle_and_grid_are_regular() {
    let g = ring(4);
    let res = layout(&g, Algorithm::Circle).expect("layout");
    for p in res.positions.values() {
        assert!(((p.x * p.x + p.y * p.y).sqrt() - 1.0).abs() < 1e-12);
    }
    let n2 = res.get("n2").expect("n2");
    assert!((n2.x + 1.0).abs() < 1e-12 && n2.y.abs() < 1e-12);

    let g = ring(5);
    let res = layout(&g, Algorithm::Grid).expect("layout");
    let n4 = res.get("n4").expect("n4");
    assert_eq!((n4.x, n4.y), (1.0, 1.0));
}

#[test]
fn random_layout_stays_in_unit_square() {
    let res = layout(&ring(50), Algorithm::Random { random_seed: 11 }).expect("layout");
    for p in res.positions.values() {
        assert!((-1.0..1.0).contains(&p.x) && (-1.0..1.0).contains(&p.y));
    }
}
