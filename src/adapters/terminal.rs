use crate::domain::ports::Console;
use crate::utils::error::{Result, SaltError};
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

type Interrupt = Pin<Box<dyn Future<Output = ()> + Send>>;

/// `Console` over an async reader/writer pair. Every read races an interrupt future.
pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
    interrupt: Box<dyn FnMut() -> Interrupt + Send>,
}

impl TerminalConsole<BufReader<Stdin>, Stdout> {
    /// stdin/stdout, with Ctrl-C as the interrupt.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).with_interrupt(|| {
            Box::pin(async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::warn!("Failed to listen for ctrl+c: {}", e);
                    std::future::pending::<()>().await;
                }
            })
        })
    }
}

impl<R, W> TerminalConsole<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// No interrupt source; only end of input cancels.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            interrupt: Box::new(never_interrupted),
        }
    }

    pub fn with_interrupt<F>(mut self, interrupt: F) -> Self
    where
        F: FnMut() -> Interrupt + Send + 'static,
    {
        self.interrupt = Box::new(interrupt);
        self
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[async_trait]
impl<R, W> Console for TerminalConsole<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn prompt(&mut self, prompt: &str) -> Result<String> {
        self.write(prompt).await?;

        let mut line = String::new();
        let interrupted = (self.interrupt)();
        let read = tokio::select! {
            read = self.reader.read_line(&mut line) => read?,
            _ = interrupted => return Err(SaltError::Cancelled),
        };

        if read == 0 {
            tracing::debug!("End of input at prompt '{}'", prompt.trim_end());
            return Err(SaltError::Cancelled);
        }

        Ok(strip_line_ending(&line).to_string())
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

fn never_interrupted() -> Interrupt {
    Box::pin(std::future::pending())
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(line)
}
