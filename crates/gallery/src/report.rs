// File: crates/gallery/src/report.rs
// Summary: Console reporting for a gallery run, kept out of the renderers.

use chart_core::ChartOutcome;

#[derive(Default)]
pub struct Reporter {
    saved: usize,
    failed: usize,
}

impl Reporter {
    pub fn new() -> Self { Self::default() }

    pub fn started(&self, count: usize) {
        println!("Generating charts... ({count})");
    }

    pub fn outcome(&mut self, outcome: &ChartOutcome) {
        match &outcome.result {
            Ok(path) => {
                self.saved += 1;
                println!("Chart saved: {}", path.display());
            }
            Err(e) => {
                self.failed += 1;
                eprintln!("Chart failed: {e}");
            }
        }
    }

    /// Prints the summary; true when every chart was written.
    pub fn finish(&self) -> bool {
        if self.failed == 0 {
            println!("Charts successfully generated!");
        } else {
            println!("{} chart(s) saved, {} failed", self.saved, self.failed);
        }
        self.failed == 0
    }
}
