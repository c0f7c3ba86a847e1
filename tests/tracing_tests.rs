#![cfg(feature = "tracing")]

//! Integration tests for the `tracing` events emitted by traversals.

use std::io;
use std::sync::{Arc, Mutex};

use foldwise::control::{MaybeApplicative, just, nothing};
use foldwise::typeclass::{OptionApplicative, sequence, traverse};
use rstest::rstest;
use tracing::Level;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<R>(operation: impl FnOnce() -> R) -> (R, String) {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(Level::TRACE)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, operation);
    (result, buffer.contents())
}

#[rstest]
fn short_circuit_is_reported_with_position() {
    let (result, output) = capture(|| sequence(MaybeApplicative, vec![just(1), just(2), nothing(), just(4)]));

    assert_eq!(result, nothing());
    assert!(output.contains("traversal short-circuited on an absent element"));
    assert!(output.contains("position=2"));
    assert_eq!(output.matches("short-circuited").count(), 1);
}

#[rstest]
fn complete_traversal_emits_nothing() {
    let (result, output) = capture(|| traverse(OptionApplicative, |n: i32| Some(n + 1), vec![1, 2, 3]));

    assert_eq!(result, Some(vec![2, 3, 4]));
    assert!(output.is_empty());
}
