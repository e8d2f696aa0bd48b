use std::time;

/// Records labelled instants and reports the time elapsed between consecutive clicks
pub struct Stopwatch {
    instants: Vec<(&'static str, time::Instant)>,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    pub fn new() -> Stopwatch {
        Stopwatch { instants: Vec::new() }
    }

    pub fn click(&mut self, label: &'static str) {
        self.instants.push((label, time::Instant::now()));
    }

    /// Durations between consecutive clicks, labelled by the later click
    pub fn laps(&self) -> Vec<(&'static str, time::Duration)> {
        self.instants
            .windows(2)
            .map(|w| {
                let ((_, earlier), (label, later)) = (w[0], w[1]);
                (label, later.duration_since(earlier))
            })
            .collect()
    }

    /// Time between the first and the last click
    pub fn total(&self) -> time::Duration {
        match (self.instants.first(), self.instants.last()) {
            (Some((_, first)), Some((_, last))) => last.duration_since(*first),
            _ => time::Duration::ZERO,
        }
    }

    pub fn report(&self) {
        for (i, (label, elapsed)) in self.laps().into_iter().enumerate() {
            tracing::info!(
                lap = i,
                label,
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                "{}-{} : {:.3} ms",
                i,
                i + 1,
                elapsed.as_secs_f64() * 1000.0
            );
        }
    }
}
