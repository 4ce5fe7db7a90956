use crate::utils::error::Result;
use async_trait::async_trait;

/// Line-oriented text console the interactive session talks to.
#[async_trait]
pub trait Console: Send {
    /// Writes `prompt` and waits for one line of input, without its line terminator.
    ///
    /// Returns `SaltError::Cancelled` on interrupt or end of input.
    async fn prompt(&mut self, prompt: &str) -> Result<String>;

    async fn write(&mut self, text: &str) -> Result<()>;

    async fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(&format!("{}\n", text)).await
    }
}
