//! Carbon plaintext protocol client.
//!
//! Each sample is written as `<name> <value> <timestamp>\n` on a long-lived
//! TCP connection. After a failed or timed-out write the connection is
//! dropped and re-opened on the next submission.

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::net::TcpStream;
use tokio::time;

use crate::sink::{Metric, MetricsSink, SinkError};

pub struct CarbonSink {
    addr: String,
    timeout: Duration,
    stream: Option<BufWriter<TcpStream>>,
}

impl CarbonSink {
    /// Connect to `addr` (`host:port`). `timeout` bounds every connect and
    /// every batch write.
    pub async fn connect(addr: impl Into<String>, timeout: Duration) -> Result<Self, SinkError> {
        let addr = addr.into();
        let stream = open(&addr, timeout).await?;
        tracing::info!(addr = %addr, "Connected to Carbon");
        Ok(Self {
            addr,
            timeout,
            stream: Some(stream),
        })
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Whether a connection is held for the next submission.
    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }
}

async fn open(addr: &str, timeout: Duration) -> Result<BufWriter<TcpStream>, SinkError> {
    match time::timeout(timeout, TcpStream::connect(addr)).await {
        Ok(Ok(stream)) => Ok(BufWriter::new(stream)),
        Ok(Err(source)) => Err(SinkError::Connect {
            addr: addr.to_string(),
            source,
        }),
        Err(_) => Err(SinkError::Timeout {
            op: "connect",
            addr: addr.to_string(),
            after: timeout,
        }),
    }
}

async fn write_batch(stream: &mut BufWriter<TcpStream>, batch: &[Metric]) -> std::io::Result<()> {
    for metric in batch {
        stream.write_all(format!("{metric}\n").as_bytes()).await?;
    }
    stream.flush().await
}

#[async_trait]
impl MetricsSink for CarbonSink {
    async fn submit(&mut self, batch: &[Metric]) -> Result<(), SinkError> {
        let mut stream = match self.stream.take() {
            Some(stream) => stream,
            None => {
                tracing::info!(addr = %self.addr, "Reconnecting to Carbon");
                open(&self.addr, self.timeout).await?
            }
        };

        // A broken or stalled stream is dropped here and re-opened next time.
        match time::timeout(self.timeout, write_batch(&mut stream, batch)).await {
            Ok(Ok(())) => {
                self.stream = Some(stream);
                Ok(())
            }
            Ok(Err(source)) => Err(SinkError::Write {
                addr: self.addr.clone(),
                source,
            }),
            Err(_) => Err(SinkError::Timeout {
                op: "write",
                addr: self.addr.clone(),
                after: self.timeout,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncBufReadExt, BufReader};
    use tokio::net::TcpListener;

    const TIMEOUT: Duration = Duration::from_secs(2);

    #[tokio::test]
    async fn writes_one_line_per_metric() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let reader = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let mut lines = BufReader::new(socket).lines();
            let mut out = Vec::new();
            while let Some(line) = lines.next_line().await.unwrap() {
                out.push(line);
            }
            out
        });

        let mut sink = CarbonSink::connect(addr, TIMEOUT).await.unwrap();
        sink.submit(&[
            Metric::new("ns.min".into(), 12, 1_700_000_000),
            Metric::new("ns.count".into(), 3, 1_700_000_000),
        ])
        .await
        .unwrap();
        drop(sink);

        let lines = reader.await.unwrap();
        assert_eq!(lines, vec!["ns.min 12 1700000000", "ns.count 3 1700000000"]);
    }

    #[tokio::test]
    async fn connect_failure_is_reported() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);

        let err = CarbonSink::connect(addr, TIMEOUT).await.err().unwrap();
        assert!(matches!(err, SinkError::Connect { .. }));
    }

    #[tokio::test]
    async fn broken_connection_is_reopened_on_next_submit() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let server = tokio::spawn(async move {
            let (first, _) = listener.accept().await.unwrap();
            drop(first);
            let (second, _) = listener.accept().await.unwrap();
            BufReader::new(second).lines().next_line().await.unwrap()
        });

        let mut sink = CarbonSink::connect(addr.clone(), TIMEOUT).await.unwrap();
        assert_eq!(sink.addr(), addr);
        let batch = [Metric::new("ns.count".into(), 7, 1_700_000_000)];

        // The first writes after the peer closes can still land in the kernel buffer.
        let mut failure = None;
        for _ in 0..50 {
            match sink.submit(&batch).await {
                Ok(()) => tokio::time::sleep(Duration::from_millis(10)).await,
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }
        assert!(matches!(failure, Some(SinkError::Write { .. })), "got {failure:?}");
        assert!(!sink.is_connected());

        sink.submit(&batch).await.unwrap();
        assert!(sink.is_connected());
        assert_eq!(server.await.unwrap().as_deref(), Some("ns.count 7 1700000000"));
    }

    #[tokio::test]
    async fn stalled_reader_times_out_write() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        // Accept and hold the socket without ever reading from it.
        let holder = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
            drop(socket);
        });

        let timeout = Duration::from_millis(200);
        let mut sink = CarbonSink::connect(addr, timeout).await.unwrap();

        // Far larger than the loopback socket buffers, so the write has to block.
        let oversized = [Metric::new("x".repeat(64 << 20), 1, 1_700_000_000)];
        let err = sink.submit(&oversized).await.unwrap_err();

        assert!(
            matches!(err, SinkError::Timeout { op: "write", after, .. } if after == timeout),
            "got {err:?}"
        );
        assert!(!sink.is_connected());
        holder.abort();
    }
}
