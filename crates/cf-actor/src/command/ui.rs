//! Output surface for commands.

use cc_framework::Warnings;

/// Where commands send what the user sees.
pub trait Ui {
    fn display_text(&mut self, text: &str);

    /// Shows each warning on its own line. Called whether or not the
    /// operation that produced them succeeded.
    fn display_warnings(&mut self, warnings: &Warnings);

    fn display_ok(&mut self);
}

/// Writes text to stdout and warnings to stderr.
#[derive(Debug, Default)]
pub struct ConsoleUi;

impl Ui for ConsoleUi {
    fn display_text(&mut self, text: &str) {
        println!("{text}");
    }

    fn display_warnings(&mut self, warnings: &Warnings) {
        for warning in warnings {
            eprintln!("{warning}");
        }
    }

    fn display_ok(&mut self) {
        println!("OK");
    }
}
