// Fatal errors and policy-driven skipping over real XML

use std::io::Write;

use mbxml::{
    parse_file, parse_str, parse_tokens, parse_with_config, EntityKind, Materialization,
    MaterializationPolicy, ParseError, ParserConfig, Token, TokenList,
};

#[test]
fn test_non_numeric_length_is_invalid_number() {
    let xml = r#"<metadata><recording id="r1"><title>Song</title><length>abc</length></recording></metadata>"#;
    match parse_str(xml).unwrap_err() {
        ParseError::InvalidNumber { field, text, .. } => {
            assert_eq!(field, "length");
            assert_eq!(text, "abc");
        }
        other => panic!("Expected InvalidNumber, got {:?}", other),
    }
}

#[test]
fn test_numeric_length() {
    let xml = r#"<metadata><recording id="r1"><length> 217000 </length></recording></metadata>"#;
    let recording = parse_str(xml).unwrap().recording.unwrap();
    assert_eq!(recording.length, Some(217000));
}

#[test]
fn test_missing_identifier() {
    let xml = r#"<metadata><artist><name>Nobody</name></artist></metadata>"#;
    let err = parse_str(xml).unwrap_err();
    assert!(matches!(
        err,
        ParseError::MissingAttribute { ref tag, ref attribute, .. } if tag == "artist" && attribute == "id"
    ));
}

#[test]
fn test_input_without_root_element() {
    for xml in ["", "   \n", "<?xml version=\"1.0\"?>\n<!-- nothing here -->"] {
        let err = parse_str(xml).unwrap_err();
        assert!(
            matches!(err, ParseError::MissingElement { ref tag } if tag == "metadata"),
            "{:?} gave {:?}",
            xml,
            err
        );
    }
}

#[test]
fn test_truncated_record_names_its_tag() {
    let tokens = vec![
        Token::start("metadata", &[]),
        Token::start("release", &[("id", "r1")]),
        Token::start("title", &[]),
        Token::text("Half"),
        Token::end("title"),
    ];
    let err = parse_tokens(TokenList::new(tokens), &ParserConfig::default()).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEnd { ref tag, .. } if tag == "release"));
    assert_eq!(err.tag(), Some("release"));
}

#[test]
fn test_truncated_xml_names_open_element() {
    let xml = r#"<metadata><release id="r1"><title>Half</title>"#;
    let err = parse_str(xml).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEnd { ref tag, .. } if tag == "release"), "{:?}", err);

    let xml = r#"<metadata><release id="r1"><title>Half"#;
    let err = parse_str(xml).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEnd { ref tag, .. } if tag == "title"), "{:?}", err);

    let xml = r#"<metadata generator="x">"#;
    let err = parse_str(xml).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEnd { ref tag, .. } if tag == "metadata"), "{:?}", err);
}

#[test]
fn test_paging_with_huge_offset() {
    let xml = r#"<metadata><recording-list count="5" offset="18446744073709551615"><recording id="r"/></recording-list></metadata>"#;
    let config = ParserConfig::default().with_policy(MaterializationPolicy::everything());
    let recordings = parse_with_config(xml.as_bytes(), &config)
        .unwrap()
        .recording_list
        .expect("recording list");
    assert_eq!(recordings.offset, u64::MAX);
    assert!(!recordings.has_more());
}

#[test]
fn test_mismatched_end_tag_is_xml_error() {
    let xml = r#"<metadata><artist id="a1"><name>x</sort-name></artist></metadata>"#;
    let err = parse_str(xml).unwrap_err();
    assert!(matches!(err, ParseError::Xml { .. }), "{:?}", err);
    assert!(err.position().is_some());
}

#[test]
fn test_full_skip_of_deep_subtree() {
    let xml = r#"<metadata>
  <disc id="disc1">
    <release-list count="1">
      <release id="r1">
        <medium-list>
          <medium>
            <track-list><track><title>deep</title></track></track-list>
          </medium>
        </medium-list>
      </release>
    </release-list>
  </disc>
  <artist id="after"><name>Next Sibling</name></artist>
</metadata>"#;
    let metadata = parse_str(xml).expect("skipped subtree is not an error");
    assert!(metadata.disc.is_none());
    assert_eq!(
        metadata.artist.unwrap().name.as_deref(),
        Some("Next Sibling")
    );
}

#[test]
fn test_skipped_entity_is_built_when_enabled() {
    let xml = r#"<metadata><disc id="disc1"><sectors>198592</sectors></disc></metadata>"#;
    let config = ParserConfig::default()
        .with_policy(MaterializationPolicy::default().with(EntityKind::Disc, Materialization::Full));
    let disc = parse_with_config(xml.as_bytes(), &config)
        .unwrap()
        .disc
        .expect("disc built");
    assert_eq!(disc.id, "disc1");
    assert_eq!(disc.sectors, Some(198592));
}

#[test]
fn test_skipped_subtree_is_not_validated() {
    // a bad number inside a skipped work does not fail the parse
    let xml = r#"<metadata><work id="w1"><rating>lots</rating></work></metadata>"#;
    let metadata = parse_str(xml).expect("work is skipped");
    assert!(metadata.work.is_none());

    let config = ParserConfig::default().with_policy(MaterializationPolicy::everything());
    let err = parse_with_config(xml.as_bytes(), &config).unwrap_err();
    assert!(matches!(err, ParseError::InvalidNumber { ref field, .. } if field == "rating"));
}

#[test]
fn test_puid_list_attributes_only_by_default() {
    let xml = r#"<metadata><recording id="r1">
  <puid-list count="2"><puid id="p1"/><puid id="p2"/></puid-list>
</recording></metadata>"#;
    let recording = parse_str(xml).unwrap().recording.unwrap();
    let puids = recording.puid_list.expect("paging kept");
    assert_eq!(puids.count, 2);
    assert!(puids.is_empty());
}

#[test]
fn test_depth_limit_over_xml() {
    let xml = r#"<metadata><artist id="a1"><life-span><begin>1970</begin></life-span></artist></metadata>"#;
    let config = ParserConfig::default().with_max_depth(3);
    let err = parse_with_config(xml.as_bytes(), &config).unwrap_err();
    assert!(matches!(err, ParseError::DepthExceeded { ref tag, limit: 3, .. } if tag == "begin"));

    // unknown subtrees count too
    let xml = r#"<metadata><a><b><c><d>x</d></c></b></a></metadata>"#;
    let err = parse_with_config(xml.as_bytes(), &config).unwrap_err();
    assert!(matches!(err, ParseError::DepthExceeded { ref tag, .. } if tag == "c"));
}

#[test]
fn test_yaml_config_drives_parse() {
    let config = ParserConfig::from_yaml_str(
        "materialize:\n  overrides:\n    work: full\n    work-list: full\n",
    )
    .unwrap();
    let xml = r#"<metadata><work-list count="1"><work id="w1" type="Song"><title>Yesterday</title><iswc>T-010.140.236-1</iswc></work></work-list></metadata>"#;
    let works = parse_with_config(xml.as_bytes(), &config)
        .unwrap()
        .work_list
        .expect("work list built");
    assert_eq!(works.items[0].kind.as_deref(), Some("Song"));
    assert_eq!(works.items[0].iswc.as_deref(), Some("T-010.140.236-1"));
}

#[test]
fn test_parse_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"<metadata><label id="l1"><name>Apple Records</name><label-code>46</label-code></label></metadata>"#
    )
    .unwrap();
    file.flush().unwrap();

    let metadata = parse_file(file.path(), &ParserConfig::default()).unwrap();
    assert_eq!(metadata.label.unwrap().label_code, Some(46));
}

#[test]
fn test_parse_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_file(dir.path().join("absent.xml"), &ParserConfig::default()).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}
