use std::path::{Path, PathBuf};
use topoviz_graphml::{AttrValue, Error, read_graphml, read_graphml_file};

fn fixture(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .join("fixtures")
        .join("topology")
        .join(name)
}

#[test]
fn reads_three_node_fixture() {
    let g = read_graphml_file(fixture("three_nodes.graphml")).expect("read fixture");

    assert!(!g.directed);
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 2);
    let ids: Vec<_> = g.vertices.iter().map(|v| v.id().unwrap()).collect();
    assert_eq!(ids, vec!["n0", "n1", "n2"]);
    assert_eq!(
        g.vertex_attr(1, "NODEID"),
        Some(&AttrValue::String("00000002".to_string()))
    );
    assert_eq!(g.edge_pairs().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
}

#[test]
fn reads_testbed_graph_attributes() {
    let g = read_graphml_file(fixture("testbed.graphml")).expect("read fixture");

    assert!(g.directed);
    assert_eq!(g.vertex_count(), 8);
    assert_eq!(g.edge_count(), 20);
    assert_eq!(g.attributes.get("FID_LEN"), Some(&AttrValue::Numeric(32.0)));
    assert_eq!(
        g.attributes.get("TM_MODE").and_then(AttrValue::as_str),
        Some("user")
    );
    let lid = g.edges[0].attr("LID").and_then(AttrValue::as_str).unwrap();
    assert_eq!(lid.len(), 256);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = read_graphml_file(fixture("does_not_exist.graphml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "unexpected error: {err}");
}

#[test]
fn defaults_fill_missing_data() {
    let text = r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <key id="d0" for="node" attr.name="color" attr.type="string"><default>yellow</default></key>
  <key id="d1" for="edge" attr.name="weight" attr.type="double"/>
  <key id="d2" for="all" attr.name="up" attr.type="boolean"/>
  <graph edgedefault="undirected">
    <node id="a"><data key="d0">green</data></node>
    <node id="b"/>
    <edge source="a" target="b"><data key="d1">1.5</data><data key="d2">TRUE</data></edge>
    <edge source="b" target="a"/>
  </graph>
</graphml>"#;
    let g = read_graphml(text).expect("parse");

    assert_eq!(g.vertex_attr(0, "color").and_then(AttrValue::as_str), Some("green"));
    assert_eq!(g.vertex_attr(1, "color").and_then(AttrValue::as_str), Some("yellow"));
    assert_eq!(g.vertex_attr(1, "up"), Some(&AttrValue::Boolean(false)));
    assert_eq!(g.edges[0].attr("weight"), Some(&AttrValue::Numeric(1.5)));
    assert_eq!(g.edges[0].attr("up"), Some(&AttrValue::Boolean(true)));
    assert!(g.edges[1].attr("weight").and_then(AttrValue::as_f64).unwrap().is_nan());
}

#[test]
fn edge_directed_attribute_overrides_edgedefault() {
    let text = r#"<graphml>
  <graph edgedefault="undirected">
    <node id="a"/><node id="b"/>
    <edge source="a" target="b" directed="true"/>
    <edge source="b" target="a"/>
  </graph>
</graphml>"#;
    let g = read_graphml(text).expect("parse");

    assert!(!g.directed);
    assert!(g.edges[0].directed);
    assert!(!g.edges[1].directed);
}

#[test]
fn edges_create_undeclared_vertices() {
    let text = r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <graph>
    <edge id="e0" source="a" target="b"/>
    <node id="a"/>
  </graph>
</graphml>"#;
    let g = read_graphml(text).expect("parse");

    assert!(g.directed);
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.find_vertex("a"), Some(0));
    assert_eq!(g.find_vertex("b"), Some(1));
    assert_eq!(g.edges[0].attr("id").and_then(AttrValue::as_str), Some("e0"));
}

#[test]
fn duplicate_node_ids_are_rejected() {
    let text = r#"<graphml><graph><node id="a"/><node id="a"/></graph></graphml>"#;
    let err = read_graphml(text).unwrap_err();
    assert!(matches!(err, Error::DuplicateNode { ref id } if id == "a"));
}

#[test]
fn structural_errors_are_reported() {
    assert!(matches!(
        read_graphml("<svg/>").unwrap_err(),
        Error::NotGraphml { ref found } if found == "svg"
    ));
    assert!(matches!(
        read_graphml("<graphml/>").unwrap_err(),
        Error::NoGraph
    ));
    assert!(matches!(
        read_graphml("<graphml><graph><node/></graph></graphml>").unwrap_err(),
        Error::MissingAttribute {
            element: "node",
            attribute: "id"
        }
    ));
    assert!(matches!(
        read_graphml("<graphml").unwrap_err(),
        Error::Xml(_)
    ));
    assert!(matches!(
        read_graphml(r#"<graphml><key id="k" attr.type="complex"/><graph/></graphml>"#)
            .unwrap_err(),
        Error::UnknownAttrType { .. }
    ));
}

#[test]
fn node_data_named_id_does_not_replace_node_id() {
    let text = r#"<graphml>
  <key id="k" for="node" attr.name="id"/>
  <graph><node id="n7"><data key="k">other</data></node></graph>
</graphml>"#;
    let g = read_graphml(text).expect("parse");
    assert_eq!(g.vertices[0].id(), Some("n7"));
}

#[test]
fn unsupported_elements_are_skipped() {
    let text = r#"<graphml>
  <graph>
    <node id="a"><port name="p"/><graph><node id="inner"/></graph></node>
    <node id="b"/>
    <hyperedge><endpoint node="a"/><endpoint node="b"/></hyperedge>
    <edge source="a" target="b"/>
  </graph>
  <graph><node id="second"/></graph>
</graphml>"#;
    let g = read_graphml(text).expect("parse");
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.find_vertex("inner"), None);
}

#[test]
fn edge_data_named_id_does_not_replace_edge_id() {
    let text = r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <key id="k" for="edge" attr.name="id"><default>fallback</default></key>
  <graph edgedefault="undirected">
    <node id="a"/><node id="b"/>
    <edge id="e0" source="a" target="b"><data key="k">other</data></edge>
    <edge source="b" target="a"/>
  </graph>
</graphml>"#;
    let g = read_graphml(text).expect("parse");
    assert_eq!(g.edges[0].attr("id").and_then(AttrValue::as_str), Some("e0"));
    assert_eq!(g.edges[1].attr("id"), None);
}

#[test]
fn doctype_header_is_accepted() {
    let text = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE graphml SYSTEM "http://graphml.graphdrawing.org/dtds/graphml.dtd">
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <graph edgedefault="undirected"><node id="n0"/></graph>
</graphml>"#;
    let g = read_graphml(text).expect("parse");
    assert_eq!(g.vertex_count(), 1);
    assert_eq!(g.vertices[0].id(), Some("n0"));
}
