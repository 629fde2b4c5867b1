//! Test chat client.
//!
//! Sends raw newline-terminated lines and decodes the server's tinted
//! replies into [`Styled`] values for assertions.

use std::time::Duration;

use futures_util::StreamExt;
use tint_proto::{PackCodec, Styled};
use tokio::io::AsyncWriteExt;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_util::codec::FramedRead;

/// A connected test client.
pub struct TestClient {
    frames: FramedRead<OwnedReadHalf, PackCodec>,
    writer: OwnedWriteHalf,
}

impl TestClient {
    /// Connect to a test server.
    pub async fn connect(address: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(address).await?;
        let (read_half, write_half) = stream.into_split();

        Ok(Self {
            frames: FramedRead::new(read_half, PackCodec::new()),
            writer: write_half,
        })
    }

    /// Send one line of input.
    pub async fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        Ok(())
    }

    /// Receive a single message.
    pub async fn recv(&mut self) -> anyhow::Result<Styled> {
        self.recv_timeout(Duration::from_secs(5)).await
    }

    /// Receive a message with a timeout.
    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<Styled> {
        match timeout(dur, self.frames.next()).await? {
            Some(frame) => Ok(frame?),
            None => anyhow::bail!("connection closed"),
        }
    }

    /// Receive exactly `n` messages.
    pub async fn recv_n(&mut self, n: usize) -> anyhow::Result<Vec<Styled>> {
        let mut messages = Vec::with_capacity(n);
        for _ in 0..n {
            messages.push(self.recv().await?);
        }
        Ok(messages)
    }

    /// Receive messages until the predicate matches; the matching message is
    /// included in the result.
    pub async fn recv_until<F>(&mut self, mut predicate: F) -> anyhow::Result<Vec<Styled>>
    where
        F: FnMut(&Styled) -> bool,
    {
        let mut messages = Vec::new();
        loop {
            let msg = self.recv().await?;
            let done = predicate(&msg);
            messages.push(msg);
            if done {
                break;
            }
        }
        Ok(messages)
    }

    /// Consume the green connect banner every session receives first.
    pub async fn expect_welcome(&mut self) -> anyhow::Result<Styled> {
        let msg = self.recv().await?;
        anyhow::ensure!(
            msg.text.starts_with("SERVER: Connected to server"),
            "unexpected first message: {:?}",
            msg
        );
        Ok(msg)
    }

    /// Assert that nothing arrives within `dur`.
    pub async fn expect_silence(&mut self, dur: Duration) -> anyhow::Result<()> {
        match timeout(dur, self.frames.next()).await {
            Err(_) => Ok(()),
            Ok(Some(frame)) => anyhow::bail!("unexpected message: {:?}", frame?),
            Ok(None) => anyhow::bail!("connection closed"),
        }
    }

    /// Close the write half so the server observes end-of-stream.
    pub async fn close(mut self) -> anyhow::Result<()> {
        self.writer.shutdown().await?;
        Ok(())
    }
}
