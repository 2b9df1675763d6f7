//! Terminal output for CLI commands.

use console::{Style, Term};

/// Status lines go to stderr, command results to stdout.
pub(crate) struct Output {
    status: Term,
    results: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            results: Term::stdout(),
        }
    }

    fn styled(term: &Term, style: &Style, msg: &str) {
        let _ = term.write_line(&style.apply_to(msg).to_string());
    }

    pub(crate) fn info(&self, msg: &str) {
        let _ = self.status.write_line(msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        Self::styled(&self.status, &Style::new().green(), msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        Self::styled(&self.status, &Style::new().yellow(), msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        Self::styled(&self.status, &Style::new().red(), msg);
    }

    /// Bold heading above a result listing.
    pub(crate) fn heading(&self, title: &str) {
        Self::styled(&self.results, &Style::new().bold(), title);
    }

    /// One plain result line.
    pub(crate) fn print(&self, line: &str) {
        let _ = self.results.write_line(line);
    }
}
