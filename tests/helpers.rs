// Shared test helpers: a scripted localhost HTTP server.
//
// The server plays back a fixed list of raw responses, one per accepted
// connection, closing each connection after writing (the client frames
// bodies by connection close). It records the request line of every request
// it receives so tests can assert on paths and hop counts.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// A localhost server that serves a fixed script of responses.
pub struct MockServer {
    addr: String,
    handle: thread::JoinHandle<Vec<String>>,
}

impl MockServer {
    /// Starts a server that answers one connection per response, in order,
    /// then stops listening.
    #[allow(dead_code)] // Used by other test files
    pub fn serve(responses: Vec<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let port = listener.local_addr().expect("local addr").port();
        let addr = format!("127.0.0.1:{port}");

        let handle = thread::spawn(move || {
            let mut request_lines = Vec::new();
            for response in responses {
                let (mut stream, _) = match listener.accept() {
                    Ok(accepted) => accepted,
                    Err(_) => break,
                };
                request_lines.push(read_request_line(&mut stream));
                stream
                    .write_all(response.as_bytes())
                    .expect("write response");
                // Dropping the stream closes the connection and ends the body.
            }
            request_lines
        });

        Self { addr, handle }
    }

    /// URL for `path` on this server.
    #[allow(dead_code)] // Used by other test files
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Address (`127.0.0.1:port`) of this server.
    #[allow(dead_code)] // Used by other test files
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Waits for the server to finish its script and returns the request
    /// lines it saw, in order.
    #[allow(dead_code)] // Used by other test files
    pub fn finish(self) -> Vec<String> {
        self.handle.join().expect("mock server thread")
    }
}

/// Reads one request up to the blank line and returns its request line.
fn read_request_line(stream: &mut TcpStream) -> String {
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .expect("set read timeout");
    let mut head = Vec::new();
    let mut byte = [0u8; 1];
    while !head.ends_with(b"\r\n\r\n") {
        match stream.read(&mut byte) {
            Ok(0) | Err(_) => break,
            Ok(_) => head.push(byte[0]),
        }
    }
    String::from_utf8_lossy(&head)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// A terminal 200 response with the given body.
#[allow(dead_code)] // Used by other test files
pub fn ok_response(content_type: &str, body: &str) -> String {
    format!("HTTP/1.1 200 OK\r\nContent-Type: {content_type}\r\n\r\n{body}")
}

/// A redirect response pointing at `location`.
#[allow(dead_code)] // Used by other test files
pub fn redirect_response(status: u16, location: &str) -> String {
    format!("HTTP/1.1 {status} Moved\r\nLocation: {location}\r\n\r\n")
}
