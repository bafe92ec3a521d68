//! Shared helpers for pkgmirror CLI tests.
//!
//! Provides fixture spec content, a runner for the compiled binary, and a
//! minimal canned-response HTTP server for end-to-end mirror tests.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::path::Path;
use std::process::{Command, Output};
use std::thread;

/// Write a file, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// Run the pkgmirror binary with `args`, from `dir`.
pub fn run_pkgmirror(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pkgmirror"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run pkgmirror")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Serve the same canned HTTP response for up to `max_conns` connections.
///
/// Binds an ephemeral localhost port and answers every request with
/// `status_line` (e.g. `HTTP/1.1 200 OK`) and `body`. The serving thread
/// is detached; it dies with the test process.
pub fn spawn_http_server(
    status_line: &'static str,
    body: &'static [u8],
    max_conns: usize,
) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test http server");
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for _ in 0..max_conns {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut request = [0u8; 2048];
            let _ = stream.read(&mut request);
            let header = format!(
                "{status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(body);
        }
    });

    addr
}
