//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application:
//!
//! - `config`: Environment driven configuration
//! - `errors`: Typed repository errors
//! - `PagerWriter`: `std::io::Write` adapter over the `minus` pager

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

pub mod config;
pub mod errors;

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it to the repository writer. `log` and `global-log` are routed through
/// it when stdout is a terminal.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let repository = Repository::new(root, Box::new(PagerWriter::new(pager.clone())))?;
/// repository.log().await?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn pager(&self) -> &Pager {
        &self.pager
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
