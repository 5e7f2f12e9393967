use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use sojson_core::{OperationKind, ProcessingRequest, RequestSeq};
use sojson_logging::sojson_debug;

use crate::{ClientError, ClientEvent, FailureKind, RequestClient};

enum ClientCommand {
    Submit {
        seq: RequestSeq,
        kind: OperationKind,
        request: ProcessingRequest,
    },
}

/// Runs requests on a background tokio runtime and reports completions
/// through a channel, so the caller's loop never blocks on the network.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    /// Starts the worker thread. Completions arrive on the returned receiver.
    pub fn spawn(
        client: Arc<dyn RequestClient>,
    ) -> io::Result<(Self, mpsc::Receiver<ClientEvent>)> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .thread_name("sojson-client")
            .build()?;

        thread::Builder::new()
            .name("sojson-client-commands".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(client.as_ref(), command, event_tx).await;
                    });
                }
                sojson_debug!("client command channel closed");
            })?;

        Ok((Self { cmd_tx }, event_rx))
    }

    /// Queues one request. Overlapping submissions are not prevented here.
    /// Fails when the worker thread is gone, in which case no completion
    /// will ever arrive for `seq`.
    pub fn submit(
        &self,
        seq: RequestSeq,
        kind: OperationKind,
        request: ProcessingRequest,
    ) -> Result<(), ClientError> {
        self.cmd_tx
            .send(ClientCommand::Submit { seq, kind, request })
            .map_err(|_| {
                ClientError::new(FailureKind::WorkerStopped, "request worker is not running")
            })
    }
}

async fn handle_command(
    client: &dyn RequestClient,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Submit { seq, kind, request } => {
            let result = client.process(kind, &request).await;
            let _ = event_tx.send(ClientEvent::Completed { seq, kind, result });
        }
    }
}

#[cfg(test)]
mod tests {
    use sojson_core::IndentSize;

    use super::*;

    #[test]
    fn submit_to_stopped_worker_is_an_error() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        drop(cmd_rx);
        let handle = ClientHandle { cmd_tx };
        let request = ProcessingRequest::new("{}", IndentSize::Two).expect("request");

        let err = handle
            .submit(3, OperationKind::Format, request)
            .expect_err("worker is gone");

        assert_eq!(err.kind, FailureKind::WorkerStopped);
        assert!(!err.is_transport());
    }
}
