#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for grades integration tests

use std::net::SocketAddr;
use std::sync::Arc;

use grades::domain::GradesService;
use grades::infra::InMemoryGradeRepository;
use grades::server::serve_with_listener;
use grades_sdk::{Grade, GradesGrpcClient};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub fn create_service() -> Arc<GradesService> {
    Arc::new(GradesService::new(Arc::new(InMemoryGradeRepository::new())))
}

pub fn grade(student_id: &str, course_code: &str, score: f64) -> Grade {
    Grade::new(student_id, course_code, 2025, 2, score)
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

pub struct TestServer {
    pub addr: SocketAddr,
    pub service: Arc<GradesService>,
    pub cancel: CancellationToken,
    pub handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    pub fn uri(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn client(&self) -> GradesGrpcClient {
        GradesGrpcClient::connect(self.uri()).await.unwrap()
    }

    pub async fn stop(self) {
        self.cancel.cancel();
        self.handle.await.unwrap().unwrap();
    }
}

/// Start a server on an ephemeral localhost port.
pub async fn start_server(stream_buffer: usize) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let service = create_service();
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(serve_with_listener(
        listener,
        Arc::clone(&service),
        stream_buffer,
        cancel.clone(),
    ));

    TestServer {
        addr,
        service,
        cancel,
        handle,
    }
}
