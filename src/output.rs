use anyhow::Context;
use serde::Serialize;

/// Where a subcommand's result goes: plain lines for people, or the decoded
/// response as JSON for scripts.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Output {
    json: bool,
}

impl Output {
    pub(crate) const fn new(json: bool) -> Self {
        Self { json }
    }

    pub(crate) fn input(&self, text: &str) {
        if !self.json {
            println!("Input = {}", text);
        }
    }

    pub(crate) fn response<T, F, I>(&self, response: &T, lines: F) -> anyhow::Result<()>
    where
        T: Serialize,
        F: FnOnce(&T) -> I,
        I: IntoIterator<Item = String>,
    {
        if self.json {
            let json = serde_json::to_string_pretty(response)
                .context("failed to serialize response")?;
            println!("{}", json);
        } else {
            for line in lines(response) {
                println!("{}", line);
            }
        }
        Ok(())
    }
}
