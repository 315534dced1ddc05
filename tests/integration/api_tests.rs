use pagekit::{ArrayStyle, PaginationConfig};

use super::*;

#[tokio::test]
async fn test_basic_pagination() {
    let app = test_router(PaginationConfig::default(), 100);
    let json = get_json(app, "/items?page=2&limit=10").await;
    assert_eq!(json["page"], 2);
    assert_eq!(json["limit"], 10);
    assert_eq!(json["totalPages"], 10);
    assert_eq!(json["totalItems"], 100);
    assert_eq!(json["hasPreviousPage"], true);
    assert_eq!(json["hasNextPage"], true);
    assert_eq!(json["previousPageUrl"], "?page=1&limit=10");
    assert_eq!(json["nextPageUrl"], "?page=3&limit=10");
}

#[tokio::test]
async fn test_first_page_has_no_previous() {
    let app = test_router(PaginationConfig::default(), 50);
    let json = get_json(app, "/items?page=1&limit=25").await;
    assert_eq!(json["totalPages"], 2);
    assert_eq!(json["hasPreviousPage"], false);
    assert!(json["previousPageUrl"].is_null());
    assert_eq!(json["nextPageUrl"], "?page=2&limit=25");
}

#[tokio::test]
async fn test_page_clamped_to_last() {
    let app = test_router(PaginationConfig::default(), 50);
    let json = get_json(app, "/items?page=999&limit=10").await;
    assert_eq!(json["page"], 5);
    assert_eq!(json["totalPages"], 5);
    assert_eq!(json["hasNextPage"], false);
    assert!(json["nextPageUrl"].is_null());
}

#[tokio::test]
async fn test_disallowed_limit_falls_back() {
    let app = test_router(PaginationConfig::default(), 100);
    let json = get_json(app, "/items?page=1&limit=999").await;
    assert_eq!(json["limit"], 25);
    assert_eq!(json["totalPages"], 4);
}

#[tokio::test]
async fn test_no_query_uses_defaults() {
    let app = test_router(PaginationConfig::default(), 0);
    let json = get_json(app, "/items").await;
    assert_eq!(json["page"], 1);
    assert_eq!(json["limit"], 25);
    assert_eq!(json["totalPages"], 1);
    let links = json["links"].as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["isCurrent"], true);
    assert_eq!(links[0]["url"], "?page=1");
}

#[tokio::test]
async fn test_ellipsis_links() {
    let config = PaginationConfig::with_limit_options(&[1, 10, 25]);
    let app = test_router(config, 100);
    let json = get_json(app, "/items?page=50&limit=1").await;
    assert_eq!(json["totalPages"], 100);
    let links = json["links"].as_array().unwrap();
    let kinds: Vec<&str> = links.iter().map(|l| l["type"].as_str().unwrap()).collect();
    assert_eq!(
        kinds,
        vec!["page", "ellipsis", "page", "page", "page", "ellipsis", "page"]
    );
    let pages: Vec<u64> = links.iter().filter_map(|l| l["page"].as_u64()).collect();
    assert_eq!(pages, vec![1, 49, 50, 51, 100]);
}

#[tokio::test]
async fn test_search_preserved_everywhere() {
    let app = test_router(PaginationConfig::default(), 100);
    let json = get_json(app, "/items?page=2&limit=10&search=test").await;
    for link in json["links"].as_array().unwrap() {
        if link["type"] == "page" {
            assert!(link["url"].as_str().unwrap().contains("search=test"));
        }
    }
    for option in json["limitOptions"].as_array().unwrap() {
        let url = option["url"].as_str().unwrap();
        assert!(url.contains("search=test"), "{url}");
        assert!(!url.contains("page="), "{url}");
    }
}

#[tokio::test]
async fn test_limit_options_current() {
    let app = test_router(PaginationConfig::default(), 100);
    let json = get_json(app, "/items?limit=50").await;
    let current: Vec<u64> = json["limitOptions"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|o| o["isCurrent"] == true)
        .map(|o| o["value"].as_u64().unwrap())
        .collect();
    assert_eq!(current, vec![50]);
}

#[tokio::test]
async fn test_configured_array_style() {
    let config = PaginationConfig {
        array_style: ArrayStyle::Brackets,
        ..PaginationConfig::default()
    };
    let app = test_router(config, 100);
    let json = get_json(app, "/items?tag%5B%5D=a&tag%5B%5D=b&page=1").await;
    assert_eq!(json["nextPageUrl"], "?tag%5B%5D=a&tag%5B%5D=b&page=2");
}

#[tokio::test]
async fn test_encoded_values_round_trip() {
    let app = test_router(PaginationConfig::default(), 100);
    let json = get_json(app, "/items?q=war+%26+peace&page=2").await;
    assert_eq!(json["nextPageUrl"], "?q=war%20%26%20peace&page=3");
}
