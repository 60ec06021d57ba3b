// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output surfaces: where rendered paths and blocking diagnostics go.

/// The designated display area for the reconstructed path.
pub trait OutputArea {
    /// Replace the whole content of the area. Never patched incrementally.
    fn replace(&mut self, content: &str);
}

/// A blocking, user-visible diagnostic channel.
pub trait Diagnostics {
    /// Show `message` to the operator and wait for acknowledgement.
    fn alert(&mut self, message: &str);
}

/// In-memory output area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathPanel {
    content: String,
    replacements: usize,
}

impl PathPanel {
    /// An empty panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently shown content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// How many times the content has been replaced.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl OutputArea for PathPanel {
    fn replace(&mut self, content: &str) {
        self.content.clear();
        self.content.push_str(content);
        self.replacements += 1;
    }
}

impl<T: OutputArea + ?Sized> OutputArea for &mut T {
    fn replace(&mut self, content: &str) {
        (**self).replace(content);
    }
}

/// Diagnostics channel that records alerts in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticLog {
    alerts: Vec<String>,
}

impl DiagnosticLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts raised so far, oldest first.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Diagnostics for DiagnosticLog {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }
}
