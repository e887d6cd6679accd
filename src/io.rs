//! Injectable line-oriented console interfaces.
//!
//! The game loop talks to the terminal only through [`LineRead`] and
//! [`LineWrite`], so it can be driven by scripted fakes in tests and by
//! the real console in the `golf` binary.

use alloc::string::String;

/// A blocking source of input lines.
pub trait LineRead {
    /// Reads one line, without its trailing newline.
    ///
    /// Returns `None` when the source is closed or unreadable.
    fn read_line(&mut self) -> Option<String>;
}

/// A sink for output lines.
pub trait LineWrite {
    /// Writes one line.
    fn write_line(&mut self, line: &str);
}

/// Standard-input adapter.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Default)]
pub struct ConsoleInput;

#[cfg(feature = "std")]
impl LineRead for ConsoleInput {
    fn read_line(&mut self) -> Option<String> {
        let mut buf = String::new();
        match std::io::stdin().read_line(&mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(buf.trim_end_matches(['\r', '\n']).into()),
        }
    }
}

/// Standard-output adapter.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Default)]
pub struct ConsoleOutput;

#[cfg(feature = "std")]
impl LineWrite for ConsoleOutput {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}
