// Integration tests for the explorer query API

use std::sync::Arc;

use hanzi_decomp::{
    CharacterRecord, DataLoader, Explorer, ExplorerConfig, Idc, IdcFilter, QueryFilters,
    RadicalVariants, StrokeCount, StrokeRange, Table, MAX_DEPTH,
};

fn create_explorer() -> Explorer {
    Explorer::new(DataLoader::sample().unwrap(), RadicalVariants::standard())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============ Containment ============

#[test]
fn test_rest_example() {
    let table = DataLoader::parse(
        r#"{"character":"休","strokes":6,"decomposition":"⿰亻木"}
{"character":"木","strokes":4,"decomposition":""}"#,
    )
    .unwrap();
    let explorer = Explorer::new(table, RadicalVariants::none());
    let filters = QueryFilters::new().with_strokes(StrokeRange::new(0, 10));

    assert_eq!(
        explorer.characters_containing("木", 1, &filters),
        strings(&["木", "休"])
    );
}

#[test]
fn test_self_membership_all_depths() {
    let explorer = create_explorer();
    for depth in 0..=MAX_DEPTH {
        for symbol in explorer.table().symbols() {
            let results = explorer.characters_containing(symbol, depth, &QueryFilters::new());
            assert!(
                results.iter().any(|c| c == symbol),
                "{} not in its own results at depth {}",
                symbol,
                depth
            );
        }
    }
}

#[test]
fn test_unknown_strokes_last_and_unique() {
    let table = Table::from_records(vec![
        CharacterRecord::new("丨", StrokeCount::Unknown),
        CharacterRecord::new("中", StrokeCount::Known(4)).with_decomposition("⿻口丨"),
        CharacterRecord::new("串", StrokeCount::Unknown).with_decomposition("⿻吕丨"),
        CharacterRecord::new("卜", StrokeCount::Known(2)).with_decomposition("⿰丨丶"),
    ]);
    let explorer = Explorer::new(table, RadicalVariants::none());
    let results = explorer.characters_containing("丨", 2, &QueryFilters::new());

    assert_eq!(results, strings(&["卜", "中", "丨", "串"]));
}

#[test]
fn test_bounded_range_drops_unknown_strokes() {
    let explorer = create_explorer();
    let filters = QueryFilters::new().with_strokes(StrokeRange::new(0, 30));
    let results = explorer.characters_containing("丨", 1, &filters);
    assert!(results.is_empty());

    let open = explorer.characters_containing("丨", 1, &QueryFilters::new());
    assert_eq!(open, strings(&["丨"]));
}

#[test]
fn test_inverted_range_normalized() {
    let explorer = create_explorer();
    let forward = QueryFilters::new().with_strokes(StrokeRange::new(4, 10));
    let inverted = QueryFilters::new().with_strokes(StrokeRange::new(10, 4));
    assert_eq!(
        explorer.characters_containing("木", 1, &forward),
        explorer.characters_containing("木", 1, &inverted)
    );
}

#[test]
fn test_whitespace_around_component() {
    let explorer = create_explorer();
    assert_eq!(
        explorer.characters_containing(" 木 ", 1, &QueryFilters::new()),
        explorer.characters_containing("木", 1, &QueryFilters::new())
    );
}

// ============ Structure Filter ============

#[test]
fn test_wrong_marker_excluded() {
    let explorer = create_explorer();
    let filters = QueryFilters::new().with_idc(IdcFilter::Exact(Idc::AboveBelow));
    let results = explorer.characters_containing("日", 1, &filters);
    assert!(!results.contains(&"明".to_string()));

    let left_right = QueryFilters::new().with_idc(IdcFilter::Exact(Idc::LeftRight));
    let results = explorer.characters_containing("日", 1, &left_right);
    assert_eq!(results, strings(&["明"]));
}

#[test]
fn test_variant_counts_for_membership() {
    // 伙 reaches 人 only through 亻 → 人
    let table = Table::from_records(vec![
        CharacterRecord::new("人", StrokeCount::Known(2)),
        CharacterRecord::new("亻", StrokeCount::Known(2)).with_decomposition("人"),
        CharacterRecord::new("伙", StrokeCount::Known(6)).with_decomposition("⿰亻火"),
    ]);
    let filters = QueryFilters::new().with_idc(IdcFilter::Exact(Idc::LeftRight));

    let with_variants = Explorer::new(table.clone(), RadicalVariants::standard());
    assert_eq!(
        with_variants.characters_containing("人", 1, &filters),
        strings(&["伙"])
    );

    let without = Explorer::new(table, RadicalVariants::none());
    assert!(without.characters_containing("人", 1, &filters).is_empty());
}

#[test]
fn test_variant_lists_not_merged() {
    let explorer = create_explorer();
    let person = explorer.characters_containing("人", 1, &QueryFilters::new());
    let radical = explorer.characters_containing("亻", 1, &QueryFilters::new());

    assert_eq!(person, strings(&["人"]));
    assert!(radical.contains(&"休".to_string()));
    assert!(radical.contains(&"体".to_string()));
}

// ============ Compound Filter ============

#[test]
fn test_compound_length_excludes_non_matching() {
    let explorer = create_explorer();
    let two = QueryFilters::new().with_compound_length(2);
    let results = explorer.characters_containing("日", 1, &two);

    assert!(results.contains(&"明".to_string()));
    assert!(results.contains(&"日".to_string()));

    let four = QueryFilters::new().with_compound_length(4);
    assert!(explorer.characters_containing("日", 1, &four).is_empty());
}

#[test]
fn test_all_filters_combined() {
    let explorer = create_explorer();
    let filters = QueryFilters::new()
        .with_strokes(StrokeRange::new(6, 8))
        .with_idc(IdcFilter::Exact(Idc::AboveBelow))
        .with_compound_length(2);
    let results = explorer.characters_containing("木", 2, &filters);

    assert_eq!(results, strings(&["呆", "李", "杏", "果"]));
}

// ============ Lookups ============

#[test]
fn test_lookups() {
    let explorer = create_explorer();
    assert_eq!(explorer.stroke_count("林"), StrokeCount::Known(8));
    assert_eq!(explorer.stroke_count("丨"), StrokeCount::Unknown);
    assert_eq!(explorer.record_of("林").unwrap().decomposition, "⿰木木");
    assert_eq!(explorer.compounds("林", Some(2)).len(), 3);
    assert_eq!(explorer.decomposition("森", 1), strings(&["木", "林"]));
}

// ============ Index Lifecycle ============

#[test]
fn test_concurrent_first_requests_share_index() {
    let explorer = create_explorer();
    let indices: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| explorer.index(3))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for index in &indices[1..] {
        assert!(Arc::ptr_eq(&indices[0], index));
    }
}

#[test]
fn test_parallel_queries_agree() {
    let explorer = create_explorer();
    let expected = explorer.characters_containing("木", 2, &QueryFilters::new());

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let got = explorer.characters_containing("木", 2, &QueryFilters::new());
                assert_eq!(got, expected);
            });
        }
    });
}

#[test]
fn test_from_config_defaults_to_sample() {
    let explorer = Explorer::from_config(&ExplorerConfig::default()).unwrap();
    assert_eq!(explorer.table().len(), DataLoader::sample().unwrap().len());
    assert!(!explorer.variants().is_empty());
}
