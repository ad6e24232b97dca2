use crate::SeederWorld;
use cucumber::{given, then, when};
use issue_seeder::catalog::ISSUES;
use issue_seeder::run::run;
use serde_json::json;
use std::process::ExitCode;
use std::sync::atomic::{AtomicU64, Ordering};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Answers 201 with consecutive issue numbers starting at 1.
struct CreatedResponder {
    next_number: AtomicU64,
}

impl Respond for CreatedResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let number = self.next_number.fetch_add(1, Ordering::SeqCst);
        ResponseTemplate::new(201).set_body_json(json!({
            "number": number,
            "html_url": format!("https://github.com/octocat/hello-world/issues/{number}"),
        }))
    }
}

fn issues_path(world: &SeederWorld) -> String {
    format!("/repos/{}/issues", world.repository)
}

fn server(world: &SeederWorld) -> &MockServer {
    world
        .server
        .as_ref()
        .expect("mock GitHub API must be started first")
}

async fn received_issue_requests(world: &SeederWorld) -> Vec<Request> {
    let expected_path = issues_path(world);
    server(world)
        .received_requests()
        .await
        .expect("request recording is enabled by default")
        .into_iter()
        .filter(|request| request.method.as_str() == "POST" && request.url.path() == expected_path)
        .collect()
}

fn output(world: &SeederWorld) -> String {
    String::from_utf8(world.captured_output.clone()).expect("Invalid UTF-8")
}

#[given(regex = r#"^a mock GitHub API for "([^"]+)"$"#)]
async fn given_mock_github_api(world: &mut SeederWorld, repository: String) {
    let server = MockServer::start().await;
    world
        .env
        .insert("GITHUB_API_URL".to_string(), server.uri());
    world
        .env
        .insert("ISSUE_SEEDER_REPOSITORY".to_string(), repository.clone());
    world.repository = repository;
    world.server = Some(server);
}

#[given(regex = r#"^a GitHub token "([^"]+)" is configured$"#)]
async fn given_token(world: &mut SeederWorld, token: String) {
    world.env.insert("GITHUB_TOKEN".to_string(), token);
}

#[given("no GitHub token is configured")]
async fn given_no_token(world: &mut SeederWorld) {
    world.env.remove("GITHUB_TOKEN");
}

#[given("the GitHub API accepts every issue")]
async fn given_api_accepts_every_issue(world: &mut SeederWorld) {
    Mock::given(method("POST"))
        .and(path(issues_path(world)))
        .respond_with(CreatedResponder {
            next_number: AtomicU64::new(1),
        })
        .mount(server(world))
        .await;
}

#[given(regex = r#"^the GitHub API rejects the issue titled "([^"]+)" with status (\d+)$"#)]
async fn given_api_rejects_issue(world: &mut SeederWorld, title: String, status: u16) {
    Mock::given(method("POST"))
        .and(path(issues_path(world)))
        .and(body_partial_json(json!({ "title": title })))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "message": "Validation Failed",
            "errors": [{ "resource": "Issue", "code": "invalid", "field": "labels" }],
            "documentation_url": "https://docs.github.com/rest/issues/issues#create-an-issue"
        })))
        .with_priority(1)
        .mount(server(world))
        .await;
}

#[given("the GitHub API is unreachable")]
async fn given_api_unreachable(world: &mut SeederWorld) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let address = listener.local_addr().expect("local address");
    drop(listener);
    world
        .env
        .insert("GITHUB_API_URL".to_string(), format!("http://{address}"));
}

#[when("I run `issue-seeder`")]
async fn when_run_issue_seeder(world: &mut SeederWorld) {
    let mut buffer: Vec<u8> = Vec::new();
    let writer_option: Option<&mut dyn std::io::Write> = Some(&mut buffer);

    let env = world.env.clone();
    let completion = run(move |key| env.get(key).cloned(), writer_option)
        .await
        .expect("run should not return an error");

    world.captured_output = buffer;
    world.run_succeeded = Some(completion.exit_code() == ExitCode::SUCCESS);
}

#[when("I run the issue-seeder binary without GITHUB_TOKEN")]
async fn when_run_binary_without_token(world: &mut SeederWorld) {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_issue-seeder"))
        .env_remove("GITHUB_TOKEN")
        .env("GITHUB_API_URL", server(world).uri())
        .env("ISSUE_SEEDER_REPOSITORY", &world.repository)
        .output()
        .expect("Failed to execute issue-seeder binary");

    world.captured_output = [output.stdout, output.stderr].concat();
    world.run_succeeded = Some(output.status.success());
}

#[when(regex = r#"^I run the issue-seeder binary with arguments "([^"]*)"$"#)]
async fn when_run_binary_with_arguments(world: &mut SeederWorld, arguments: String) {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_issue-seeder"))
        .args(arguments.split_whitespace())
        .env_clear()
        .envs(&world.env)
        .output()
        .expect("Failed to execute issue-seeder binary");

    world.captured_output = [output.stdout, output.stderr].concat();
    world.run_succeeded = Some(output.status.success());
}

#[then(regex = r#"^the reported tally should be (\d+) out of (\d+)$"#)]
async fn then_tally(world: &mut SeederWorld, created: usize, total: usize) {
    let output = output(world);
    let re = regex::Regex::new(r"Successfully created (\d+) out of (\d+) user stories").unwrap();
    let captures = re
        .captures(&output)
        .unwrap_or_else(|| panic!("No tally found in output:\n{}", output));

    assert_eq!(captures[1].parse::<usize>().unwrap(), created);
    assert_eq!(captures[2].parse::<usize>().unwrap(), total);
}

fn assert_output_contains(world: &SeederWorld, expected: &str) {
    let output = output(world);
    assert!(
        output.contains(expected),
        "Expected '{}' in output:\n---\n{}\n---",
        expected,
        output
    );
}

#[then(regex = r#"^the output should contain "(.*)"$"#)]
async fn then_output_contains(world: &mut SeederWorld, expected: String) {
    assert_output_contains(world, &expected);
}

#[then(regex = r#"^the output should contain '(.*)'$"#)]
async fn then_output_contains_single_quoted(world: &mut SeederWorld, expected: String) {
    assert_output_contains(world, &expected);
}

#[then(regex = r#"^the API should have received (\d+) issue requests$"#)]
async fn then_request_count(world: &mut SeederWorld, count: usize) {
    let requests = received_issue_requests(world).await;
    assert_eq!(requests.len(), count);
}

#[then(regex = r#"^the API should have received (\d+) issue requests in catalog order$"#)]
async fn then_requests_in_catalog_order(world: &mut SeederWorld, count: usize) {
    let requests = received_issue_requests(world).await;
    assert_eq!(requests.len(), count);

    let titles: Vec<String> = requests
        .iter()
        .map(|request| {
            let body: serde_json::Value = request.body_json().expect("JSON request body");
            body["title"].as_str().expect("title field").to_string()
        })
        .collect();
    let expected: Vec<&str> = ISSUES.iter().map(|issue| issue.title).collect();
    assert_eq!(titles, expected);

    for (request, issue) in requests.iter().zip(ISSUES) {
        let body: serde_json::Value = request.body_json().expect("JSON request body");
        assert_eq!(body["body"], json!(issue.body));
        assert_eq!(body["labels"], json!(issue.labels));
    }
}

#[then(regex = r#"^every request should carry the header "([^"]+)" with value "([^"]+)"$"#)]
async fn then_every_request_has_header(world: &mut SeederWorld, name: String, value: String) {
    let requests = received_issue_requests(world).await;
    assert!(!requests.is_empty(), "No requests were received");

    for request in requests {
        let actual = request
            .headers
            .get(name.as_str())
            .and_then(|header| header.to_str().ok());
        assert_eq!(actual, Some(value.as_str()), "header {}", name);
    }
}

#[then("the run should succeed")]
async fn then_run_succeeds(world: &mut SeederWorld) {
    assert_eq!(
        world.run_succeeded,
        Some(true),
        "Run failed, output:\n{}",
        output(world)
    );
}

#[then("the run should fail")]
async fn then_run_fails(world: &mut SeederWorld) {
    assert_eq!(
        world.run_succeeded,
        Some(false),
        "Run should have failed, output:\n{}",
        output(world)
    );
}
