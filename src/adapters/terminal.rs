use crate::domain::ports::Prompt;
use crate::utils::error::Result;
use std::io::{self, BufRead};

/// Blocking line reader over stdin. Each prompt consumes one line; a closed
/// stdin reads as `None` and ends the pagination loop.
pub struct StdinPrompt {
    stdin: io::Stdin,
}

impl StdinPrompt {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for StdinPrompt {
    fn read_reply(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes = self.stdin.lock().read_line(&mut line)?;
        if bytes == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}
