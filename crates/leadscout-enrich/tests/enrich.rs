use leadscout_enrich::types::{EnrichConfig, NO_NEWS_PAGE, SITE_UNREACHABLE};
use leadscout_enrich::{CompanyEnricher, PersonEnricher, WebSearchClient};
use leadscout_nlp::InsightModels;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> EnrichConfig {
    EnrichConfig {
        user_agent: "leadscout-tests".into(),
        timeout_secs: 5,
        quick_timeout_secs: 5,
        web_base: server.uri(),
        raw_base: server.uri(),
        search_base: server.uri(),
        website_template: format!("{}/sites/{{slug}}", server.uri()),
    }
}

#[tokio::test]
async fn profile_metrics_parses_counters_and_bio() {
    let server = MockServer::start().await;
    let profile = r#"
        <html><head>
            <meta property="og:description" content="ML engineer building data tooling">
        </head><body>
            <a href="/alice?tab=followers"><span>1.2k</span> followers</a>
            <a href="/alice?tab=repositories"><span>34</span></a>
        </body></html>
    "#;
    Mock::given(method("GET"))
        .and(path("/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_string(profile))
        .mount(&server)
        .await;

    let enricher = PersonEnricher::new(&config_for(&server)).expect("client builds");
    let metrics = enricher
        .profile_metrics(&format!("{}/alice", server.uri()))
        .await;

    assert_eq!(metrics.followers, 1200);
    assert_eq!(metrics.repositories, 34);
    assert_eq!(metrics.bio, "ML engineer building data tooling");
}

#[tokio::test]
async fn profile_metrics_degrades_to_neutral_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bob"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let enricher = PersonEnricher::new(&config_for(&server)).expect("client builds");
    let metrics = enricher
        .profile_metrics(&format!("{}/bob", server.uri()))
        .await;

    assert_eq!(metrics.followers, 0);
    assert_eq!(metrics.repositories, 0);
    assert!(metrics.bio.is_empty());
}

#[tokio::test]
async fn top_project_summary_falls_back_to_readme_excerpt() {
    let server = MockServer::start().await;
    let listing = r#"
        <li itemprop="owns">
            <a itemprop="name codeRepository" href="/alice/scraper">scraper</a>
            <a href="/alice/scraper/stargazers">12</a>
        </li>
        <li itemprop="owns">
            <a itemprop="name codeRepository" href="/alice/big-project">big-project</a>
            <a href="/alice/big-project/stargazers">1.5k</a>
        </li>
    "#;
    let readme = "x".repeat(400);
    Mock::given(method("GET"))
        .and(path("/alice"))
        .and(query_param("tab", "repositories"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/alice/big-project/main/README.md"))
        .respond_with(ResponseTemplate::new(200).set_body_string(readme))
        .mount(&server)
        .await;

    let enricher = PersonEnricher::new(&config_for(&server)).expect("client builds");
    let models = InsightModels::init(None, None, 5);
    let summary = enricher.top_project_summary(&models, "alice").await;

    assert!(summary.starts_with("big-project: "));
    assert!(summary.ends_with("..."));
    // 150-char excerpt plus the "{repo}: " prefix and ellipsis.
    assert_eq!(summary.len(), "big-project: ".len() + 150 + 3);
}

#[tokio::test]
async fn top_project_summary_handles_missing_readme() {
    let server = MockServer::start().await;
    let listing = r#"
        <li itemprop="owns">
            <a itemprop="name codeRepository" href="/carol/notes">notes</a>
            <a href="/carol/notes/stargazers">3</a>
        </li>
    "#;
    Mock::given(method("GET"))
        .and(path("/carol"))
        .and(query_param("tab", "repositories"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/carol/notes/main/README.md"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let enricher = PersonEnricher::new(&config_for(&server)).expect("client builds");
    let models = InsightModels::init(None, None, 5);
    let summary = enricher.top_project_summary(&models, "carol").await;

    assert_eq!(summary, "notes: No detailed README available.");
}

#[tokio::test]
async fn top_project_summary_without_repos_uses_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dave"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>nothing here</body></html>"))
        .mount(&server)
        .await;

    let enricher = PersonEnricher::new(&config_for(&server)).expect("client builds");
    let models = InsightModels::init(None, None, 5);
    let summary = enricher.top_project_summary(&models, "dave").await;

    assert_eq!(summary, "No standout public project found.");
}

#[tokio::test]
async fn company_news_follows_news_link_and_joins_headlines() {
    let server = MockServer::start().await;
    let homepage = r#"
        <a href="/about">About</a>
        <a href="/newsroom">Newsroom</a>
    "#;
    let news_page = r"
        <h1>Acme raises Series B</h1>
        <h2>New engineering office opens</h2>
    ";
    Mock::given(method("GET"))
        .and(path("/sites/acme"))
        .respond_with(ResponseTemplate::new(200).set_body_string(homepage))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/newsroom"))
        .respond_with(ResponseTemplate::new(200).set_body_string(news_page))
        .mount(&server)
        .await;

    let enricher = CompanyEnricher::new(&config_for(&server)).expect("client builds");
    let website = enricher.guess_website("Acme");
    assert_eq!(website, format!("{}/sites/acme", server.uri()));

    let news = enricher.company_news(&website).await;
    assert!(!news.is_sentinel());
    assert_eq!(
        news.text,
        "Acme raises Series B. New engineering office opens"
    );
    assert!(news.url.ends_with("/newsroom"));
}

#[tokio::test]
async fn company_news_sentinels() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites/nolinks"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<a href='/about'>About</a>"))
        .mount(&server)
        .await;

    let enricher = CompanyEnricher::new(&config_for(&server)).expect("client builds");

    let no_news = enricher
        .company_news(&format!("{}/sites/nolinks", server.uri()))
        .await;
    assert_eq!(no_news.text, NO_NEWS_PAGE);
    assert!(no_news.is_sentinel());

    let unreachable = enricher
        .company_news(&format!("{}/sites/offline", server.uri()))
        .await;
    assert_eq!(unreachable.text, SITE_UNREACHABLE);
    assert!(unreachable.is_sentinel());
}

#[tokio::test]
async fn linkedin_search_strips_query_and_skips_placeholders() {
    let server = MockServer::start().await;
    let results = r#"
        <a href="https://www.linkedin.com/company/acme/jobs/">Jobs</a>
        <a href="https://www.linkedin.com/company/acme?trk=result">Acme | LinkedIn</a>
    "#;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results))
        .mount(&server)
        .await;

    let search = WebSearchClient::new(&config_for(&server)).expect("client builds");

    let found = search.find_company_linkedin_url("Acme").await;
    assert_eq!(
        found.as_deref(),
        Some("https://www.linkedin.com/company/acme")
    );

    assert!(search.find_company_linkedin_url("N/A").await.is_none());
    assert!(search.find_company_linkedin_url("Unknown").await.is_none());
    assert!(search.find_company_linkedin_url("  ").await.is_none());
    // Placeholder names never hit the network.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
