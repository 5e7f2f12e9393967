use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use sojson_client::{ClientError, ClientEvent, ClientHandle, RequestClient};
use sojson_core::{IndentSize, OperationKind, ProcessingRequest, ProcessingResult};

#[derive(Default)]
struct EchoClient {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl RequestClient for EchoClient {
    async fn send(
        &self,
        kind: OperationKind,
        request: &ProcessingRequest,
    ) -> Result<ProcessingResult, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ProcessingResult::Transformed {
            text: format!("{kind}:{}", request.text()),
        })
    }
}

#[test]
fn handle_reports_completion_with_sequence_number() {
    let client = Arc::new(EchoClient::default());
    let (handle, events) = ClientHandle::spawn(client.clone()).expect("spawn");

    let request = ProcessingRequest::new("{}", IndentSize::Two).unwrap();
    handle
        .submit(7, OperationKind::Format, request)
        .expect("submit");

    let event = events
        .recv_timeout(Duration::from_secs(5))
        .expect("completion event");
    assert_eq!(
        event,
        ClientEvent::Completed {
            seq: 7,
            kind: OperationKind::Format,
            result: ProcessingResult::Transformed {
                text: "format:{}".to_string()
            },
        }
    );
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn each_submission_is_one_call() {
    let client = Arc::new(EchoClient::default());
    let (handle, events) = ClientHandle::spawn(client.clone()).expect("spawn");

    for seq in 1..=3 {
        let request = ProcessingRequest::new("[]", IndentSize::Zero).unwrap();
        handle
            .submit(seq, OperationKind::Unescape, request)
            .expect("submit");
    }
    let mut seqs: Vec<_> = (0..3)
        .map(|_| match events.recv_timeout(Duration::from_secs(5)).unwrap() {
            ClientEvent::Completed { seq, .. } => seq,
        })
        .collect();
    seqs.sort_unstable();

    assert_eq!(seqs, vec![1, 2, 3]);
    assert_eq!(client.calls.load(Ordering::SeqCst), 3);
}
