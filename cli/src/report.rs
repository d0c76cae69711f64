use std::path::PathBuf;

/// Outcome of one file's conversion: the destination path on success, or
/// the error message otherwise.
pub struct Outcome {
    pub source: PathBuf,
    pub result: Result<PathBuf, String>,
}

/// Ordered per-file outcomes for a whole run.
#[derive(Default)]
pub struct RunReport {
    pub outcomes: Vec<Outcome>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_converted(&mut self, source: PathBuf, dest: PathBuf) {
        self.outcomes.push(Outcome {
            source,
            result: Ok(dest),
        });
    }

    pub fn add_failed(&mut self, source: PathBuf, error: String) {
        self.outcomes.push(Outcome {
            source,
            result: Err(error),
        });
    }

    pub fn converted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    pub fn print_summary(&self) {
        println!("\n--- Summary ---");
        println!(
            "Converted: {} | Failed: {}",
            self.converted_count(),
            self.failed_count()
        );

        for outcome in &self.outcomes {
            if let Err(ref err) = outcome.result {
                println!("  ERROR {}: {}", outcome.source.display(), err);
            }
        }
    }
}
