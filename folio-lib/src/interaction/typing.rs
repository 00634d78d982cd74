use std::future::Future;
use std::time::Duration;

use crate::config::TypingConfig;

/// Something a typewriter can write into, such as an element's text
pub trait TextSink {
    fn clear(&mut self);
    fn push(&mut self, c: char);
}

impl TextSink for String {
    fn clear(&mut self) {
        String::clear(self)
    }

    fn push(&mut self, c: char) {
        String::push(self, c)
    }
}

/// Reveals a text one character at a time.
///
/// Characters are Unicode scalar values, so multi-byte text is never split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    position: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            position: 0,
        }
    }

    /// The part of the text revealed so far
    pub fn typed(&self) -> &str {
        &self.text[..self.position]
    }

    pub fn is_finished(&self) -> bool {
        self.position == self.text.len()
    }
}

impl Iterator for Typewriter {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.text[self.position..].chars().next()?;
        self.position += c.len_utf8();
        Some(c)
    }
}

/// Play the typing effect into `sink`.
///
/// Clears the sink, waits for the start delay, then appends one character
/// per interval. `sleep` supplies the timer, so the same driver runs on
/// tokio and on browser timeouts.
pub async fn play<S, F, Fut>(sink: &mut S, text: &str, timing: &TypingConfig, mut sleep: F)
where
    S: TextSink + ?Sized,
    F: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    sink.clear();
    sleep(timing.start_delay()).await;

    let mut typewriter = Typewriter::new(text);
    while let Some(c) = typewriter.next() {
        sink.push(c);
        if !typewriter.is_finished() {
            sleep(timing.interval()).await;
        }
    }
}
