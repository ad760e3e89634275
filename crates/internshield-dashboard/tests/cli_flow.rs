use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::process::{Command, Output, Stdio};
use std::thread;

fn reserve_addr() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("reserve addr");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr.to_string()
}

fn serve_once(body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
    let addr = listener.local_addr().expect("local addr").to_string();
    let body = body.to_string();

    thread::spawn(move || {
        let Ok((stream, _)) = listener.accept() else {
            return;
        };
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.trim().eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
        }
        let mut discard = vec![0u8; content_length];
        let _ = reader.read_exact(&mut discard);

        let mut stream = stream;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    addr
}

fn run_cli(endpoint: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_internshield"))
        .env("INTERNSHIELD_ENDPOINT", endpoint)
        .env("INTERNSHIELD_TIMEOUT_MS", "5000")
        .env_remove("RUST_LOG")
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("run internshield")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let text = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(text.trim()).unwrap_or_else(|e| panic!("bad json {text:?}: {e}"))
}

#[test]
fn analyze_json_reports_scam_view() {
    let addr = serve_once(
        r#"{"risk_score":82,"verdict":"Likely Scam","reasons":["Requests upfront payment","Urgency language"]}"#,
    );
    let output = run_cli(
        &format!("http://{addr}/api/verify"),
        &[
            "--json",
            "analyze",
            "--message",
            "Congrats, you got the job, wire $500 fee",
        ],
    );
    assert_eq!(output.status.code(), Some(0));

    let view = stdout_json(&output);
    assert_eq!(view["state"], "settled");
    assert_eq!(view["results"]["displayed_score"], 82);
    assert_eq!(view["results"]["risk_level"], "high");
    assert_eq!(view["results"]["verdict_style"], "danger");
    assert_eq!(view["results"]["panel"]["kind"], "risk_factors");
    assert_eq!(
        view["results"]["panel"]["reasons"]
            .as_array()
            .map(Vec::len),
        Some(2)
    );
}

#[test]
fn analyze_text_shows_reassurance_for_clean_result() {
    let addr = serve_once(r#"{"risk_score":0,"verdict":"Looks Legit","reasons":[]}"#);
    let output = run_cli(
        &format!("http://{addr}/api/verify"),
        &["--no-animate", "analyze", "--domain", "careers.acme.com"],
    );
    assert_eq!(output.status.code(), Some(0));

    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("Verdict: [ Looks Legit ] (safe)"), "{text}");
    assert!(text.contains("Safety Analysis"), "{text}");
    assert!(!text.contains("Risk Factors Detected"), "{text}");
}

#[test]
fn empty_input_is_rejected_before_any_request() {
    let endpoint = format!("http://{}/api/verify", reserve_addr());
    let output = run_cli(&endpoint, &["analyze"]);
    assert_eq!(output.status.code(), Some(2));

    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("Please enter a domain or message to verify"), "{text}");
}

#[test]
fn unreachable_service_reports_network_notice() {
    let endpoint = format!("http://{}/api/verify", reserve_addr());
    let output = run_cli(&endpoint, &["--json", "analyze", "--message", "pay the fee"]);
    assert_eq!(output.status.code(), Some(1));

    let view = stdout_json(&output);
    assert_eq!(view["state"], "failed");
    assert_eq!(view["notice"], "Backend not running or network error");
    assert!(view["results"].is_null());
}

#[test]
fn health_reports_service_message() {
    let addr = serve_once(r#"{"message":"InternShield Backend is running"}"#);
    let output = run_cli(&format!("http://{addr}/api/verify"), &["--json", "health"]);
    assert_eq!(output.status.code(), Some(0));

    let body = stdout_json(&output);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "InternShield Backend is running");
}
