use pretty_assertions::assert_eq;
use wavedesc::{
    EdgeAnnotation, NodeAnchor, ParseError, SPI_MODE2_SAMPLE, SignalTrace, ValidationError,
    WaveError, WaveformDescription,
};

fn trace(name: &str, wave: &str, node: &str) -> SignalTrace {
    SignalTrace {
        name: Some(name.to_string()),
        wave: Some(wave.to_string()),
        data: vec![],
        node: Some(node.to_string()),
    }
}

fn edges(texts: &[&str]) -> Vec<EdgeAnnotation> {
    texts.iter().map(|t| EdgeAnnotation::from(*t)).collect()
}

#[test]
fn spi_mode2_sample_constructs() {
    let desc = WaveformDescription::from_literal(SPI_MODE2_SAMPLE).unwrap();

    let names: Vec<Option<&str>> = desc.signals().iter().map(|s| s.name.as_deref()).collect();
    assert_eq!(names, vec![Some("CLK"), Some("MOSI"), Some("MISO"), Some("SS"), None]);

    let edge_texts: Vec<&str> = desc.edges().iter().map(EdgeAnnotation::text).collect();
    assert_eq!(
        edge_texts,
        vec!["A|a", "B|b", "C|c", "D|d", "E|e", "a<->b t1", "c<->d t2", "d<->e t3"]
    );

    assert_eq!(desc.signals()[1].data, vec!["MSB", "", "", "LSB"]);
    assert_eq!(desc.signals()[4].wave, None);
    assert_eq!(desc.time_axis(), 16);

    let index = desc.node_index();
    assert_eq!(index.len(), 10);
    assert_eq!(index.resolve('A'), Some(NodeAnchor { signal: 3, slot: 1 }));
    assert_eq!(index.resolve('e'), Some(NodeAnchor { signal: 4, slot: 15 }));
}

#[test]
fn spi_mode2_sample_serializes_to_equivalent_structure() {
    let desc = WaveformDescription::from_literal(SPI_MODE2_SAMPLE).unwrap();
    let value: serde_json::Value = serde_json::from_str(&desc.to_json().unwrap()).unwrap();

    let expected = serde_json::json!({
        "signal": [
            {"name": "CLK", "wave": "1...01010|101...", "node": "....B......C......"},
            {"name": "MOSI", "wave": "x..2.2.2.|2.x...", "data": ["MSB", "", "", "LSB"]},
            {"name": "MISO", "wave": "x..2.2.2.|2.x...", "data": ["MSB", "", "", "LSB"],
             "node": "...................."},
            {"name": "SS", "wave": "10.......|...1.0", "node": ".A...........D.E.."},
            {"node": ".a..b......c.d.e"}
        ],
        "edge": ["A|a", "B|b", "C|c", "D|d", "E|e", "a<->b t1", "c<->d t2", "d<->e t3"]
    });
    assert_eq!(value, expected);

    let back = WaveformDescription::from_literal(&desc.to_literal()).unwrap();
    assert_eq!(back, desc);
}

#[test]
fn empty_signals_are_rejected() {
    assert_eq!(
        WaveformDescription::new(vec![], vec![]),
        Err(ValidationError::EmptySignals)
    );
    assert_eq!(
        WaveformDescription::new(vec![], edges(&["a|b"])),
        Err(ValidationError::EmptySignals)
    );

    let err = WaveformDescription::from_json(r#"{"signal": [], "edge": []}"#).unwrap_err();
    assert!(matches!(err, WaveError::Validation(ValidationError::EmptySignals)));
}

#[test]
fn unknown_node_is_rejected() {
    let signals = vec![trace("CLK", "1.0.", ".a.b")];
    let err = WaveformDescription::new(signals, edges(&["a<->b t1", "b~>z"])).unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownNode {
            index: 1,
            text: "b~>z".to_string(),
            node: 'z',
        }
    );
}

#[test]
fn node_placed_twice_is_ambiguous_when_referenced() {
    let signals = vec![trace("CLK", "1.0.", ".a.."), SignalTrace::spacer("...a")];

    let err = WaveformDescription::new(signals.clone(), edges(&["a|a"])).unwrap_err();
    assert_eq!(
        err,
        ValidationError::AmbiguousNode {
            index: 0,
            text: "a|a".to_string(),
            node: 'a',
            count: 2,
        }
    );

    // Unreferenced duplicates are left to the report.
    assert!(WaveformDescription::new(signals, vec![]).is_ok());
}

#[test]
fn one_char_edge_is_a_self_link() {
    let desc =
        WaveformDescription::new(vec![SignalTrace::spacer(".a")], edges(&["a", "a hold"])).unwrap();
    assert_eq!(desc.edges().len(), 2);

    let err = WaveformDescription::new(vec![SignalTrace::spacer(".a")], edges(&["z"])).unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownNode {
            index: 0,
            text: "z".to_string(),
            node: 'z',
        }
    );
}

#[test]
fn blank_edges_name_no_node() {
    let desc =
        WaveformDescription::new(vec![SignalTrace::spacer(".a")], edges(&["", "   "])).unwrap();
    assert_eq!(desc.edges().len(), 2);

    let back = WaveformDescription::from_literal(&desc.to_literal()).unwrap();
    assert_eq!(back, desc);
}

#[test]
fn converts_from_signal_and_edge_lists() {
    let signals = vec![trace("CLK", "1.0.", ".a.b")];
    let desc = WaveformDescription::try_from((signals.clone(), edges(&["a->b"]))).unwrap();
    assert_eq!(desc.signals(), signals.as_slice());

    let err = WaveformDescription::try_from((vec![], vec![])).unwrap_err();
    assert_eq!(err, ValidationError::EmptySignals);
}

#[test]
fn crlf_line_continuation_in_literal_strings() {
    let desc = WaveformDescription::from_literal("{signal: [{name: 'a\\\r\nb'}]}").unwrap();
    assert_eq!(desc.signals()[0].name.as_deref(), Some("ab"));
}

#[test]
fn numeric_wave_is_a_parse_error() {
    let err = WaveformDescription::from_json(r#"{"signal": [{"name": "CLK", "wave": 5}]}"#)
        .unwrap_err();
    assert!(matches!(err, WaveError::Parse(ParseError::Json(_))));

    let err = WaveformDescription::from_literal("{signal: [{name: 'CLK', wave: 5}]}").unwrap_err();
    assert!(matches!(err, WaveError::Parse(ParseError::Json(_))));
}

#[test]
fn structural_errors_are_parse_errors() {
    for bad in [
        r#"{"edge": ["a|b"]}"#,
        r#"{"signal": {"name": "CLK"}}"#,
        r#"{"signal": [{"name": ["CLK"]}]}"#,
        r#"{"signal": [{"node": ".a"}], "edge": "a|a"}"#,
        r#"[]"#,
        "",
    ] {
        let err = WaveformDescription::from_json(bad).unwrap_err();
        assert!(matches!(err, WaveError::Parse(_)), "{bad:?} gave {err}");
    }

    let err = WaveformDescription::from_literal("{signal: [{name: 'CLK").unwrap_err();
    assert!(matches!(
        err,
        WaveError::Parse(ParseError::UnterminatedString { .. })
    ));
}

#[test]
fn edge_list_is_optional_and_unknown_keys_are_ignored() {
    let desc = WaveformDescription::from_literal(
        "{signal: [{name: 'clk', wave: 'p...'}], config: {hscale: 2}}",
    )
    .unwrap();
    assert!(desc.edges().is_empty());
    assert_eq!(desc.to_json().unwrap(), r#"{"signal":[{"name":"clk","wave":"p..."}]}"#);
}

#[test]
fn data_given_as_text_is_split() {
    let desc: WaveformDescription = "{signal: [{wave: '2.2.2', data: 'head body tail'}]}"
        .parse()
        .unwrap();
    assert_eq!(desc.signals()[0].data, vec!["head", "body", "tail"]);
}

#[test]
fn order_is_preserved() {
    let signals = vec![
        trace("z", "0", "c"),
        trace("a", "1", "b"),
        trace("m", "x", "a"),
    ];
    let order = edges(&["c|a", "a|b", "b<->c late", "a|c"]);
    let desc = WaveformDescription::new(signals.clone(), order.clone()).unwrap();

    let back = WaveformDescription::from_json(&desc.to_json().unwrap()).unwrap();
    assert_eq!(back.signals(), signals.as_slice());
    assert_eq!(back.edges(), order.as_slice());
    assert_eq!(back.into_parts(), (signals, order));
}
