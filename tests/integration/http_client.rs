use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use p5mirror::content::{Download, HttpClient, RemoteClient};
use p5mirror::ApiError;
use tempfile::TempDir;

/// Serve canned responses on a loopback port until the test process exits.
fn serve() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { continue };
            thread::spawn(move || respond(stream));
        }
    });
    format!("http://{}", addr)
}

fn respond(mut stream: TcpStream) {
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) | Err(_) => break,
            Ok(_) if header == "\r\n" => break,
            Ok(_) => {}
        }
    }
    let path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let response: &[u8] = match path {
        "/ok" => b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello",
        "/empty" => b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        "/truncated" => {
            b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\npartial"
        }
        _ => b"HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found",
    };
    let _ = stream.write_all(response);
    let _ = stream.flush();
}

fn client() -> HttpClient {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpClient::from_client(client).unwrap()
}

#[test]
fn get_returns_status_and_body() {
    let base = serve();
    let client = client();

    let ok = client.get(&format!("{}/ok", base)).unwrap();
    assert_eq!(ok.status, 200);
    assert_eq!(ok.body, b"hello");

    let missing = client.get(&format!("{}/missing", base)).unwrap();
    assert_eq!(missing.status, 404);
    assert_eq!(missing.body, b"not found");
}

#[test]
fn download_streams_success_body_to_disk() {
    let base = serve();
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("sketch.js");

    let outcome = client().download_to(&format!("{}/ok", base), &dest).unwrap();

    assert_eq!(outcome, Download::Saved { bytes: 5 });
    assert_eq!(fs::read_to_string(&dest).unwrap(), "hello");
}

#[test]
fn download_rejected_status_does_not_create_file() {
    let base = serve();
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("gone.png");

    let outcome = client()
        .download_to(&format!("{}/missing", base), &dest)
        .unwrap();

    assert_eq!(outcome, Download::Rejected { status: 404 });
    assert!(!dest.exists());
}

#[test]
fn download_empty_body_creates_empty_file() {
    let base = serve();
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("blank.txt");

    let outcome = client()
        .download_to(&format!("{}/empty", base), &dest)
        .unwrap();

    assert_eq!(outcome, Download::Saved { bytes: 0 });
    assert_eq!(fs::read(&dest).unwrap(), Vec::<u8>::new());
}

#[test]
fn truncated_body_is_a_transport_error_and_leaves_no_file() {
    let base = serve();
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("cut.bin");

    let err = client()
        .download_to(&format!("{}/truncated", base), &dest)
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }), "got {err:?}");
    assert!(!dest.exists());
}

#[test]
fn unreachable_host_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("never.bin");

    let err = client()
        .download_to(&format!("http://{}/ok", addr), &dest)
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }), "got {err:?}");
    assert!(!dest.exists());
}
