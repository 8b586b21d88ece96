//! Shared utilities for integration testing.

use std::io::Write;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use beacon_receiver::config::ReceiverConfig;
use beacon_receiver::console::Console;
use beacon_receiver::http::HttpServer;
use beacon_receiver::lifecycle::Shutdown;

/// In-memory console writer shared between the test and the server.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A receiver instance running on an ephemeral port.
pub struct TestReceiver {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub output: SharedBuffer,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestReceiver {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }
}

/// Start a receiver with plain (uncolored) console output captured in memory.
pub async fn start_receiver(config: ReceiverConfig) -> TestReceiver {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let output = SharedBuffer::default();
    let console = Console::with_writer(Box::new(output.clone()), false);
    let server = HttpServer::with_console(config, console);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestReceiver {
        addr,
        shutdown,
        output,
        handle,
    }
}

/// HTTP client that talks straight to the local receiver.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
}
