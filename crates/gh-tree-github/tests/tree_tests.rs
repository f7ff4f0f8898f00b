use gh_tree::{EntryKind, RepoRef, TreeEntry, TreeSource};
use gh_tree_github::{GitHubClientConfig, GitHubTreeClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, token: Option<&str>) -> GitHubTreeClient {
    GitHubTreeClient::new(GitHubClientConfig {
        token: token.map(|t| t.into()),
        api_base_url: Some(server.uri()),
        ..GitHubClientConfig::default()
    })
    .unwrap()
}

fn repo() -> RepoRef {
    RepoRef::new("test-owner", "test-repo")
}

async fn mount_tree_fixture(server: &MockServer, fixture: &'static str) {
    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/git/trees/main"))
        .and(query_param("recursive", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(fixture, "application/json"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_tree_returns_entries_in_api_order() {
    let server = MockServer::start().await;
    mount_tree_fixture(&server, include_str!("fixtures/tree_response.json")).await;

    let listing = client_for(&server, None)
        .fetch_tree(&repo(), "main")
        .await
        .unwrap();

    assert!(!listing.truncated);
    assert_eq!(
        listing.entries,
        vec![
            TreeEntry::directory("src"),
            TreeEntry::file("src/main.go"),
            TreeEntry::file("README.md"),
            TreeEntry::new("vendor/lib", EntryKind::Other("commit".into())),
        ]
    );
}

#[tokio::test]
async fn fetch_tree_reports_truncation_without_failing() {
    let server = MockServer::start().await;
    mount_tree_fixture(&server, include_str!("fixtures/tree_truncated.json")).await;

    let listing = client_for(&server, None)
        .fetch_tree(&repo(), "main")
        .await
        .unwrap();

    assert!(listing.truncated);
    assert_eq!(listing.entries, vec![TreeEntry::directory("docs")]);
}

#[tokio::test]
async fn fetch_tree_surfaces_404_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/git/trees/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_raw(
                r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#,
                "application/json",
            ),
        )
        .mount(&server)
        .await;

    let err = client_for(&server, None)
        .fetch_tree(&repo(), "missing")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "API error 404: Not Found");
}

#[tokio::test]
async fn fetch_tree_rejects_malformed_body() {
    let server = MockServer::start().await;
    mount_tree_fixture(&server, r#"{"sha":"abc","entries":[]}"#).await;

    let err = client_for(&server, None)
        .fetch_tree(&repo(), "main")
        .await
        .unwrap_err();

    assert!(matches!(err, gh_tree::FetchError::Parse(_)), "got: {err:?}");
}

#[tokio::test]
async fn fetch_tree_handles_network_error() {
    let client = GitHubTreeClient::new(GitHubClientConfig {
        api_base_url: Some("http://127.0.0.1:1".into()),
        ..GitHubClientConfig::default()
    })
    .unwrap();

    let err = client.fetch_tree(&repo(), "main").await.unwrap_err();
    assert!(matches!(err, gh_tree::FetchError::Network(_)), "got: {err:?}");
}

#[tokio::test]
async fn requests_carry_user_agent_and_accept_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/git/trees/main"))
        .and(header("User-Agent", "gh-tree"))
        .and(header("Accept", "application/vnd.github+json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            include_str!("fixtures/tree_response.json"),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server, None)
        .fetch_tree(&repo(), "main")
        .await
        .unwrap();
}

#[tokio::test]
async fn branch_names_are_escaped_in_the_request_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/git/trees/feat%231"))
        .and(query_param("recursive", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            include_str!("fixtures/tree_response.json"),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let listing = client_for(&server, None)
        .fetch_tree(&repo(), "feat#1")
        .await
        .unwrap();

    assert_eq!(listing.entries.len(), 4);
}

#[tokio::test]
async fn slashes_in_branch_names_stay_path_separators() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/git/trees/release/v1"))
        .and(query_param("recursive", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            include_str!("fixtures/tree_response.json"),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server, None)
        .fetch_tree(&repo(), "release/v1")
        .await
        .unwrap();
}
