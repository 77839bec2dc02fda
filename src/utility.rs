use std::time::Instant;

/// Logs how long a named scope took once it is dropped.
pub struct StopWatch {
    instant: Instant,
    name: &'static str
}

impl StopWatch {
    pub fn named(name: &'static str) -> Self {
        Self { name, instant: Instant::now() }
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.instant.elapsed().as_secs_f32() * 1000.0
    }
}

impl Drop for StopWatch {
    fn drop(&mut self) {
        log::debug!("{}: {:.3} ms", self.name, self.elapsed_ms())
    }
}
