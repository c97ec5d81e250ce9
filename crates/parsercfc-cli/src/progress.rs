//! Progress reporting (§6): roughly 5% intervals to stdout.

use std::time::Instant;

pub struct Progress {
    total: usize,
    report_every: usize,
    start: Instant,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            report_every: (total / 20).max(1),
            start: Instant::now(),
        }
    }

    /// Print a progress line if `processed` lands on a report boundary or
    /// is the final file.
    pub fn report(&self, processed: usize) {
        if processed % self.report_every == 0 || processed == self.total {
            let percent = (processed as f64 / self.total as f64) * 100.0;
            let elapsed = self.start.elapsed().as_secs_f64();
            println!("[{processed}/{total}] {percent:.1}% elapsed {elapsed:.1}s", total = self.total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_every_is_at_least_one() {
        let progress = Progress::new(3);
        assert_eq!(progress.report_every, 1);
    }

    #[test]
    fn report_every_scales_with_total() {
        let progress = Progress::new(100);
        assert_eq!(progress.report_every, 5);
    }
}
