use std::fmt::Display;
use std::io::Write;

use anyhow::Context;

use crate::linked_list::LinkedList;

type Result<T> = anyhow::Result<T>;

pub const DEFAULT_SEPARATOR: &str = " => ";
pub const DEFAULT_SENTINEL: &str = "None";

/// Tokens used when writing a chain out as text.
///
/// Every element is followed by `separator`, and the line ends with
/// `sentinel`, so `["fir", "2"]` becomes `fir => 2 => None`. When a list has
/// no head, `empty_indicator` is written on a line of its own first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    pub separator: String,
    pub sentinel: String,
    pub empty_indicator: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer {
            separator: DEFAULT_SEPARATOR.to_string(),
            sentinel: DEFAULT_SENTINEL.to_string(),
            empty_indicator: DEFAULT_SENTINEL.to_string(),
        }
    }
}

impl Renderer {
    pub fn new(separator: &str, sentinel: &str, empty_indicator: &str) -> Self {
        Renderer {
            separator: separator.to_string(),
            sentinel: sentinel.to_string(),
            empty_indicator: empty_indicator.to_string(),
        }
    }

    pub fn line<I>(&self, tokens: I) -> String
        where I: IntoIterator,
              I::Item: Display
    {
        let mut line = String::new();
        for token in tokens {
            line.push_str(&token.to_string());
            line.push_str(&self.separator);
        }
        line.push_str(&self.sentinel);
        line
    }

    pub fn render_tokens<I, W>(&self, tokens: I, sink: &mut W) -> Result<()>
        where I: IntoIterator,
              I::Item: Display,
              W: Write
    {
        let line = self.line(tokens);
        writeln!(sink, "{}", line).context("failed to write rendered chain")?;
        Ok(())
    }

    pub fn render_list<T, W>(&self, list: &LinkedList<T>, sink: &mut W) -> Result<()>
        where T: Display,
              W: Write
    {
        tracing::debug!(len = list.len(), "rendering list");
        if list.is_empty() {
            writeln!(sink, "{}", self.empty_indicator).context("failed to write empty indicator")?;
        }
        self.render_tokens(list.iter(), sink)?;
        sink.flush().context("failed to flush sink")?;
        Ok(())
    }
}
