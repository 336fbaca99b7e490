//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end, including CSV export.

use std::time::Duration;
use sumi_sweep::config::{Config, ConfigOverrides, CrawlerConfig, OutputConfig, UserAgentConfig};
use sumi_sweep::crawler::{crawl, crawl_and_export, Crawler, HttpFetcher};
use sumi_sweep::output::export_records;
use sumi_sweep::{SweepError, VisitState};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration crawling `seed` up to `max_depth`
fn create_test_config(seed: String, max_depth: u32, csv_path: &str) -> Config {
    Config {
        crawler: CrawlerConfig {
            seed_url: seed,
            max_depth,
            request_timeout: 5,
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: Some("https://example.com/contact".to_string()),
        },
        output: OutputConfig {
            csv_path: csv_path.to_string(),
            record_depth: true,
        },
    }
}

/// Serves `body` as HTML at `route`
async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_robots(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

fn html_with_links(links: &[&str]) -> String {
    let anchors: String = links
        .iter()
        .map(|href| format!(r#"<a href="{}">{}</a>"#, href, href))
        .collect();
    format!(
        "<html><head><title>Test</title></head><body>{}</body></html>",
        anchors
    )
}

fn depths(report: &sumi_sweep::CrawlReport, base_url: &str) -> Vec<(String, u32)> {
    report
        .records
        .iter()
        .map(|r| (r.url.trim_start_matches(base_url).to_string(), r.depth))
        .collect()
}

fn expected(items: &[(&str, u32)]) -> Vec<(String, u32)> {
    items.iter().map(|(p, d)| (p.to_string(), *d)).collect()
}

#[tokio::test]
async fn test_full_crawl_single_origin() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "User-agent: *\nAllow: /").await;
    mount_page(
        &mock_server,
        "/",
        html_with_links(&[&format!("{}/page1", base_url), "/page2"]),
    )
    .await;
    mount_page(&mock_server, "/page1", html_with_links(&["page3"])).await;
    mount_page(&mock_server, "/page2", html_with_links(&["/"])).await;
    mount_page(&mock_server, "/page3", html_with_links(&[])).await;

    let config = create_test_config(format!("{}/", base_url), 2, "unused.csv");
    let report = crawl(&config).await.expect("Crawl failed");

    assert_eq!(
        depths(&report, &base_url),
        expected(&[("/", 0), ("/page1", 1), ("/page3", 2), ("/page2", 1)])
    );
    assert_eq!(report.stats.count(VisitState::Expanded), 3);
    assert_eq!(report.stats.count(VisitState::TerminalDepth), 1);
}

#[tokio::test]
async fn test_user_agent_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header(
            "user-agent",
            "TestBot/1.0.0 (+https://example.com/contact)",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(format!("{}/", mock_server.uri()), 1, "unused.csv");
    let report = crawl(&config).await.expect("Crawl failed");
    assert_eq!(report.stats.count(VisitState::Expanded), 1);
}

#[tokio::test]
async fn test_robots_txt_respect() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "User-agent: *\nDisallow: /admin").await;
    mount_page(
        &mock_server,
        "/",
        html_with_links(&["/allowed", "/admin", "/admin/users"]),
    )
    .await;
    mount_page(&mock_server, "/allowed", html_with_links(&[])).await;

    // The disallowed pages must never be requested
    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_with_links(&["/leak"])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(format!("{}/", base_url), 3, "unused.csv");
    let report = crawl(&config).await.expect("Crawl failed");

    // Denied URLs are still recorded
    assert_eq!(
        depths(&report, &base_url),
        expected(&[
            ("/", 0),
            ("/allowed", 1),
            ("/admin", 1),
            ("/admin/users", 1)
        ])
    );
    assert_eq!(report.stats.count(VisitState::PolicyDenied), 2);
}

#[tokio::test]
async fn test_allow_checked_before_disallow() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "User-agent: *\nAllow: /public\nDisallow: /").await;
    mount_page(
        &mock_server,
        "/public/index.html",
        html_with_links(&["/public/x", "/private"]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/public/x"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_with_links(&[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(format!("{}/public/index.html", base_url), 2, "unused.csv");
    let report = crawl(&config).await.expect("Crawl failed");

    assert_eq!(
        depths(&report, &base_url),
        expected(&[("/public/index.html", 0), ("/public/x", 1), ("/private", 1)])
    );
}

#[tokio::test]
async fn test_robots_fetched_once_per_origin() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // expect(1) is verified when the server is dropped
    mount_robots(&mock_server, "User-agent: *\nDisallow: /nowhere").await;
    mount_page(&mock_server, "/", html_with_links(&["/a", "/b", "/c"])).await;
    mount_page(&mock_server, "/a", html_with_links(&["/b"])).await;
    mount_page(&mock_server, "/b", html_with_links(&["/c"])).await;
    mount_page(&mock_server, "/c", html_with_links(&["/a"])).await;

    let config = create_test_config(format!("{}/", base_url), 5, "unused.csv");
    let report = crawl(&config).await.expect("Crawl failed");

    assert_eq!(report.stats.robots_fetches, 1);
    assert_eq!(report.records.len(), 4);
}

#[tokio::test]
async fn test_missing_robots_allows_all() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/", html_with_links(&["/a"])).await;
    mount_page(&mock_server, "/a", html_with_links(&["/"])).await;

    let config = create_test_config(format!("{}/", base_url), 3, "unused.csv");
    let report = crawl(&config).await.expect("Crawl failed");

    assert_eq!(
        depths(&report, &base_url),
        expected(&[("/", 0), ("/a", 1)])
    );
}

#[tokio::test]
async fn test_failed_page_stops_branch_only() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", html_with_links(&["/down", "/missing", "/up"])).await;
    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/up", html_with_links(&["/up/child"])).await;
    mount_page(&mock_server, "/up/child", html_with_links(&[])).await;

    let config = create_test_config(format!("{}/", base_url), 3, "unused.csv");
    let report = crawl(&config).await.expect("Crawl failed");

    assert_eq!(
        depths(&report, &base_url),
        expected(&[
            ("/", 0),
            ("/down", 1),
            ("/missing", 1),
            ("/up", 1),
            ("/up/child", 2)
        ])
    );
    assert_eq!(report.stats.count(VisitState::FetchFailed), 2);
}

#[tokio::test]
async fn test_redirect_followed_and_links_resolved_against_target() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let target = format!("{}/new/", base_url);

    mount_page(&mock_server, "/", html_with_links(&["/old"])).await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", target.as_str()))
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/new/", html_with_links(&["child"])).await;
    mount_page(&mock_server, "/new/child", html_with_links(&[])).await;

    let config = create_test_config(format!("{}/", base_url), 3, "unused.csv");
    let report = crawl(&config).await.expect("Crawl failed");

    assert_eq!(
        depths(&report, &base_url),
        expected(&[("/", 0), ("/old", 1), ("/new/child", 2)])
    );
}

#[tokio::test]
async fn test_cross_origin_links_not_followed() {
    let site = MockServer::start().await;
    let other = MockServer::start().await;
    let base_url = site.uri();

    mount_page(
        &site,
        "/",
        html_with_links(&[&format!("{}/elsewhere", other.uri()), "/local"]),
    )
    .await;
    mount_page(&site, "/local", html_with_links(&[])).await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_with_links(&[])))
        .expect(0)
        .mount(&other)
        .await;

    let config = create_test_config(format!("{}/", base_url), 3, "unused.csv");
    let report = crawl(&config).await.expect("Crawl failed");

    assert_eq!(
        depths(&report, &base_url),
        expected(&[("/", 0), ("/local", 1)])
    );
}

#[tokio::test]
async fn test_depth_zero_does_not_fetch_seed_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_with_links(&["/a"])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(format!("{}/", base_url), 0, "unused.csv");
    let report = crawl(&config).await.expect("Crawl failed");

    assert_eq!(depths(&report, &base_url), expected(&[("/", 0)]));
}

#[tokio::test]
async fn test_crawler_reusable_across_runs() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow:"))
        .expect(2)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/", html_with_links(&["/a"])).await;
    mount_page(&mock_server, "/a", html_with_links(&[])).await;

    let fetcher = HttpFetcher::from_config(&UserAgentConfig::default(), Duration::from_secs(5))
        .expect("Failed to build client");
    let crawler = Crawler::new(fetcher, 1);
    let seed = format!("{}/", base_url);

    let first = crawler.crawl(&seed).await.expect("First crawl failed");
    let second = crawler.crawl(&seed).await.expect("Second crawl failed");

    assert_eq!(first.records, second.records);
    assert_eq!(first.records.len(), 2);
}

#[tokio::test]
async fn test_export_round_trip() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", html_with_links(&["/a", "/b"])).await;
    mount_page(&mock_server, "/a", html_with_links(&["/a/deep"])).await;
    mount_page(&mock_server, "/b", html_with_links(&[])).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("urls.csv");
    let csv_path = csv_path.to_str().expect("Non UTF-8 temp path");

    let config = create_test_config(format!("{}/", base_url), 2, csv_path);
    let report = crawl(&config).await.expect("Crawl failed");
    export_records(&config.output, &report.records).expect("Export failed");

    let mut reader = csv::Reader::from_path(csv_path).expect("Failed to open CSV");
    let headers = reader.headers().expect("Missing header").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["URL", "Depth"]);

    let rows: Vec<(String, u32)> = reader
        .records()
        .map(|row| {
            let row = row.expect("Bad row");
            (row[0].to_string(), row[1].parse().expect("Bad depth"))
        })
        .collect();

    assert_eq!(rows.len(), report.records.len());
    for (row, record) in rows.iter().zip(&report.records) {
        assert_eq!(row.0, record.url);
        assert_eq!(row.1, record.depth);
    }
}

#[tokio::test]
async fn test_export_url_only() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", html_with_links(&["/a"])).await;
    mount_page(&mock_server, "/a", html_with_links(&[])).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("urls.csv");

    let mut config = create_test_config(format!("{}/", base_url), 1, "placeholder.csv");
    ConfigOverrides {
        csv_path: Some(csv_path.to_string_lossy().into_owned()),
        no_depth: true,
        ..Default::default()
    }
    .apply(&mut config);

    let report = crawl(&config).await.expect("Crawl failed");
    export_records(&config.output, &report.records).expect("Export failed");

    let content = std::fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert_eq!(
        content,
        format!("URL\n{}/\n{}/a\n", base_url, base_url)
    );
}

#[tokio::test]
async fn test_crawl_and_export_writes_configured_file() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", html_with_links(&["/a"])).await;
    mount_page(&mock_server, "/a", html_with_links(&[])).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("sweep.csv");
    let config = create_test_config(
        format!("{}/", base_url),
        1,
        csv_path.to_str().expect("Non UTF-8 temp path"),
    );

    let report = crawl_and_export(&config).await.expect("Sweep failed");

    let content = std::fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert_eq!(content.lines().count(), report.records.len() + 1);
    assert_eq!(content, format!("URL,Depth\n{}/,0\n{}/a,1\n", base_url, base_url));
}

#[tokio::test]
async fn test_unwritable_output_reported_as_output_error() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", html_with_links(&[])).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("missing").join("sweep.csv");
    let config = create_test_config(
        format!("{}/", base_url),
        1,
        csv_path.to_str().expect("Non UTF-8 temp path"),
    );

    let result = crawl_and_export(&config).await;
    assert!(matches!(result, Err(SweepError::Output(_))));
    assert!(!csv_path.exists());
}

#[tokio::test]
async fn test_invalid_config_rejected_before_any_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_with_links(&[])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(format!("{}/", mock_server.uri()), 1, "unused.csv");
    config.user_agent.crawler_name = "Not Valid!".to_string();

    let result = crawl(&config).await;
    assert!(matches!(result, Err(SweepError::Config(_))));
}
