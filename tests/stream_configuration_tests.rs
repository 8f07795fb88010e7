use rs2_eager::{of, SortStrategy, Stream, StreamConfig, StreamError};

#[test]
fn test_default_config() {
    let config = StreamConfig::default();
    assert_eq!(config.sort_strategy, SortStrategy::Stable);
    assert_eq!(config.drain_capacity, 16);
    assert_eq!(StreamConfig::new(), config);
}

#[test]
fn test_builder() {
    let config = StreamConfig::new()
        .sort_strategy(SortStrategy::Unstable)
        .drain_capacity(256);
    assert_eq!(config.sort_strategy, SortStrategy::Unstable);
    assert_eq!(config.drain_capacity, 256);
}

#[test]
fn test_from_json() {
    let config = StreamConfig::from_json(r#"{"sort_strategy": "unstable", "drain_capacity": 64}"#)
        .unwrap();
    assert_eq!(config.sort_strategy, SortStrategy::Unstable);
    assert_eq!(config.drain_capacity, 64);
}

#[test]
fn test_from_json_missing_fields_use_defaults() {
    let config = StreamConfig::from_json(r#"{"drain_capacity": 8}"#).unwrap();
    assert_eq!(config.sort_strategy, SortStrategy::Stable);
    assert_eq!(config.drain_capacity, 8);
}

#[test]
fn test_from_json_invalid() {
    let result = StreamConfig::from_json(r#"{"sort_strategy": "sideways"}"#);
    assert!(matches!(result, Err(StreamError::Config(_))));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = StreamConfig::new().sort_strategy(SortStrategy::Unstable);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(StreamConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_sorted_with_config_stable() {
    let config = StreamConfig::from_json(r#"{"sort_strategy": "stable"}"#).unwrap();
    let s = of(vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')])
        .sorted_with_config(&config, |x, y| x.0 < y.0);
    assert_eq!(s.to_slice(), &[(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
}

#[test]
fn test_sorted_with_config_unstable() {
    let config = StreamConfig::new().sort_strategy(SortStrategy::Unstable);
    let s = of(vec![(3, 'a'), (1, 'b'), (2, 'c'), (1, 'd')])
        .sorted_with_config(&config, |x, y| x.0 < y.0);
    let keys: Vec<i32> = s.iter().map(|pair| pair.0).collect();
    assert_eq!(keys, vec![1, 1, 2, 3]);
}

#[test]
fn test_sorted_with_config_uninitialized() {
    let s = Stream::<i32>::default().sorted_with_config(&StreamConfig::default(), |a, b| a < b);
    assert!(s.is_initialized());
    assert!(s.is_empty());
}
