use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

/// Canned reply for one connection; the last entry repeats once the script runs out.
#[derive(Debug, Clone)]
pub(crate) struct CannedResponse {
    pub(crate) status_line: &'static str,
    pub(crate) headers: Vec<(&'static str, &'static str)>,
    pub(crate) body: &'static str,
    pub(crate) delay: Option<Duration>,
    pub(crate) keep_alive: bool,
}

impl CannedResponse {
    pub(crate) fn ok() -> Self {
        Self {
            status_line: "200 OK",
            headers: vec![],
            body: "OK",
            delay: None,
            keep_alive: false,
        }
    }

    pub(crate) fn status(status_line: &'static str) -> Self {
        Self {
            status_line,
            headers: vec![],
            body: "",
            delay: None,
            keep_alive: false,
        }
    }

    pub(crate) fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }

    pub(crate) const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Leaves the connection open so the client can reuse it.
    pub(crate) const fn keep_alive(mut self) -> Self {
        self.keep_alive = true;
        self
    }

    fn render(&self) -> String {
        let headers: String = self
            .headers
            .iter()
            .map(|(name, value)| format!("{}: {}\r\n", name, value))
            .collect();
        let connection = if self.keep_alive {
            ""
        } else {
            "Connection: close\r\n"
        };
        format!(
            "HTTP/1.1 {}\r\n{}Content-Length: {}\r\n{}\r\n{}",
            self.status_line,
            headers,
            self.body.len(),
            connection,
            self.body
        )
    }
}

pub(crate) struct TestServer {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
    requests: Arc<Mutex<Vec<String>>>,
    connections: Arc<AtomicUsize>,
}

impl TestServer {
    /// Request heads received so far, in arrival order.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Number of TCP connections accepted so far.
    pub(crate) fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawns a loopback HTTP/1.1 server answering with `script` in order.
pub(crate) fn spawn_test_server(
    script: Vec<CannedResponse>,
) -> Result<(String, TestServer), String> {
    if script.is_empty() {
        return Err("test server script must not be empty".to_owned());
    }
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    let script = Arc::new(script);
    let connections = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&connections);

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let index = counter.fetch_add(1, Ordering::SeqCst);
                    let reply = script
                        .get(index)
                        .or_else(|| script.last())
                        .cloned()
                        .unwrap_or_else(CannedResponse::ok);
                    let seen = Arc::clone(&seen);
                    thread::spawn(move || handle_client(stream, &reply, &seen));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        TestServer {
            shutdown: shutdown_tx,
            thread: Some(handle),
            requests,
            connections,
        },
    ))
}

/// Returns a loopback URL nobody is listening on.
pub(crate) fn closed_port_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind probe port failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("probe addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

fn handle_client(mut stream: TcpStream, reply: &CannedResponse, seen: &Mutex<Vec<String>>) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    loop {
        let Some(head) = read_request_head(&mut stream) else {
            return;
        };
        if let Ok(mut guard) = seen.lock() {
            guard.push(String::from_utf8_lossy(&head).into_owned());
        }

        if let Some(delay) = reply.delay {
            thread::sleep(delay);
        }
        if stream.write_all(reply.render().as_bytes()).is_err() {
            return;
        }
        if stream.flush().is_err() {
            return;
        }
        if !reply.keep_alive {
            drop(stream.shutdown(Shutdown::Both));
            return;
        }
    }
}

fn read_request_head(stream: &mut TcpStream) -> Option<Vec<u8>> {
    let mut head = Vec::new();
    let mut buffer = [0u8; 1024];
    while !head.windows(4).any(|window| window == b"\r\n\r\n") {
        match stream.read(&mut buffer) {
            Ok(0) | Err(_) => return None,
            Ok(read) => head.extend_from_slice(buffer.get(..read).unwrap_or_default()),
        }
    }
    Some(head)
}
