use super::*;

#[test]
fn default_config_targets_same_origin_api() {
    assert_eq!(ApiConfig::default().base_url(), "/api");
}

#[test]
fn new_trims_trailing_slashes() {
    assert_eq!(ApiConfig::new("https://draws.example.com/v1//").base_url(), "https://draws.example.com/v1");
}

#[test]
fn url_joins_paths_with_and_without_leading_slash() {
    let config = ApiConfig::new("/api/");
    assert_eq!(config.url("/draws/7/publish"), "/api/draws/7/publish");
    assert_eq!(config.url("draws/7/publish"), "/api/draws/7/publish");
}

#[test]
fn resolve_base_falls_back_on_missing_or_blank_values() {
    assert_eq!(resolve_base(None), DEFAULT_API_BASE);
    assert_eq!(resolve_base(Some("   ")), DEFAULT_API_BASE);
    assert_eq!(resolve_base(Some(" https://api.test ")), "https://api.test");
}
