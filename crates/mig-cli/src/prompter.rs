//! Interactive prompts on the terminal.

use async_trait::async_trait;
use mig_sync::{MigrateError, Prompter, Result as MigrateResult};
use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Lines, Stderr, Stdin,
};
use tokio::sync::Mutex;

/// Prompter reading answers line by line. End of input cancels the run.
pub struct TerminalPrompter<R, W> {
    input: Mutex<Lines<BufReader<R>>>,
    output: Mutex<W>,
}

impl TerminalPrompter<Stdin, Stderr> {
    /// Questions on stderr so stdout stays clean for logs and the summary
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stderr())
    }
}

impl<R, W> TerminalPrompter<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            input: Mutex::new(BufReader::new(reader).lines()),
            output: Mutex::new(writer),
        }
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    async fn ask(&self, question: &str) -> MigrateResult<String> {
        let mut output = self.output.lock().await;
        output
            .write_all(question.as_bytes())
            .await
            .map_err(|e| MigrateError::configuration(format!("failed to write prompt: {e}")))?;
        output
            .flush()
            .await
            .map_err(|e| MigrateError::configuration(format!("failed to write prompt: {e}")))?;

        let mut input = self.input.lock().await;
        match input.next_line().await {
            Ok(Some(line)) => Ok(line.trim().to_string()),
            Ok(None) => Err(MigrateError::cancelled()),
            Err(e) => Err(MigrateError::configuration(format!(
                "failed to read answer: {e}"
            ))),
        }
    }
}

#[async_trait]
impl<R, W> Prompter for TerminalPrompter<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn select(
        &self,
        message: &str,
        choices: &[String],
        default: usize,
    ) -> MigrateResult<usize> {
        if choices.is_empty() {
            return Err(MigrateError::configuration(format!(
                "nothing to choose from for '{message}'"
            )));
        }

        let mut question = format!("? {message}\n");
        for (number, choice) in choices.iter().enumerate() {
            question.push_str(&format!("  {}) {choice}\n", number + 1));
        }
        question.push_str(&format!("Choose [{}]: ", default + 1));

        loop {
            let answer = self.ask(&question).await?;
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.parse::<usize>() {
                Ok(number) if (1..=choices.len()).contains(&number) => return Ok(number - 1),
                _ => continue,
            }
        }
    }

    async fn text(&self, message: &str, default: Option<&str>) -> MigrateResult<String> {
        let question = match default {
            Some(default) => format!("? {message} [{default}]: "),
            None => format!("? {message}: "),
        };

        let answer = self.ask(&question).await?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    async fn confirm(&self, message: &str, default: bool) -> MigrateResult<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        let question = format!("? {message} ({hint}): ");

        loop {
            match self.ask(&question).await?.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => continue,
            }
        }
    }
}
