//! Simulated pipeline tasks for the setup wizard.
//!
//! Nothing here performs real work: a "scrape" is a fixed delay followed by a
//! canned product, and a "generation run" walks a fixed schedule of progress
//! steps. Tasks are plain values polled with the current instant from the
//! owning event loop; dropping the owning state cancels the task, so no
//! callback can ever fire against a screen that is gone.

use std::time::{Duration, Instant};

use crate::models::Product;

/// How long a simulated product scrape takes.
pub const SCRAPE_DELAY: Duration = Duration::from_millis(1200);

/// How long each generation step is displayed.
pub const GENERATION_STEP: Duration = Duration::from_millis(450);

/// The fixed generation schedule: message and cumulative percentage.
///
/// Percentages are non-decreasing and the final step is always 100.
pub const GENERATION_SCHEDULE: [(&str, u16); 8] = [
    ("Importing products", 10),
    ("Applying brand brief", 25),
    ("Generating Meta ad copy", 45),
    ("Generating Google ad copy", 60),
    ("Generating TikTok ad copy", 72),
    ("Generating Pinterest ad copy", 84),
    ("Writing UGC scripts", 94),
    ("Finalizing", 100),
];

/// A pending simulated product scrape.
///
/// Created when the user submits a URL; the URL itself is never fetched.
#[derive(Debug, Clone)]
pub struct ScrapeTask {
    /// The URL the user entered (display only)
    pub url: String,
    deadline: Instant,
}

impl ScrapeTask {
    /// Starts a scrape "against" the given URL.
    #[must_use]
    pub fn start(url: String, now: Instant) -> Self {
        Self {
            url,
            deadline: now + SCRAPE_DELAY,
        }
    }

    /// Whether the scrape has finished as of `now`.
    #[must_use]
    pub fn is_done(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Round-robin cursor over the constant scrape pool.
///
/// The Nth draw returns pool entry `N mod K`, so the (K+1)-th draw repeats
/// the first entry.
#[derive(Debug, Clone)]
pub struct ProductPool {
    pool: Vec<Product>,
    cursor: usize,
}

impl ProductPool {
    /// Creates a pool over the given products.
    #[must_use]
    pub fn new(pool: Vec<Product>) -> Self {
        Self { pool, cursor: 0 }
    }

    /// Number of entries in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Draws the next product, advancing the cursor.
    ///
    /// Returns `None` only for an empty pool.
    pub fn take_next(&mut self) -> Option<Product> {
        if self.pool.is_empty() {
            return None;
        }
        let product = self.pool[self.cursor % self.pool.len()].clone();
        self.cursor += 1;
        Some(product)
    }
}

/// A scripted generation run.
///
/// Walks [`GENERATION_SCHEDULE`] one step per [`GENERATION_STEP`] interval.
/// The run always succeeds and always takes the same total time.
#[derive(Debug, Clone)]
pub struct GenerationRun {
    current: usize,
    step_deadline: Instant,
    finished: bool,
}

impl GenerationRun {
    /// Starts a run at the first schedule step.
    #[must_use]
    pub fn start(now: Instant) -> Self {
        Self {
            current: 0,
            step_deadline: now + GENERATION_STEP,
            finished: false,
        }
    }

    /// Advances the run if the current step's interval has elapsed.
    ///
    /// Advances at most one step per call. Returns `true` once the final
    /// step has been displayed for a full interval.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.finished {
            return true;
        }
        if now >= self.step_deadline {
            if self.current + 1 < GENERATION_SCHEDULE.len() {
                self.current += 1;
                self.step_deadline = now + GENERATION_STEP;
            } else {
                self.finished = true;
            }
        }
        self.finished
    }

    /// The currently displayed step message.
    #[must_use]
    pub fn message(&self) -> &'static str {
        GENERATION_SCHEDULE[self.current].0
    }

    /// The currently displayed percentage.
    #[must_use]
    pub fn percent(&self) -> u16 {
        GENERATION_SCHEDULE[self.current].1
    }

    /// Whether the run has completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::products::scrape_pool;

    #[test]
    fn test_scrape_task_completes_after_delay() {
        let start = Instant::now();
        let task = ScrapeTask::start("https://example.com/p/board".to_string(), start);
        assert!(!task.is_done(start));
        assert!(!task.is_done(start + SCRAPE_DELAY - Duration::from_millis(1)));
        assert!(task.is_done(start + SCRAPE_DELAY));
    }

    #[test]
    fn test_pool_draws_round_robin() {
        let products = scrape_pool();
        let k = products.len();
        let first = products[0].clone();
        let mut pool = ProductPool::new(products);

        let mut drawn = Vec::new();
        for _ in 0..=k {
            drawn.push(pool.take_next().unwrap());
        }
        // N draws give indexes 0..K, and the (K+1)-th repeats the first entry.
        assert_eq!(drawn.len(), k + 1);
        assert_eq!(drawn[k], first);
        for (i, product) in drawn.iter().take(k).enumerate() {
            assert_eq!(product.sku, scrape_pool()[i].sku);
        }
    }

    #[test]
    fn test_empty_pool_yields_nothing() {
        let mut pool = ProductPool::new(Vec::new());
        assert!(pool.take_next().is_none());
    }

    #[test]
    fn test_generation_schedule_is_monotonic_and_ends_at_100() {
        let mut last = 0;
        for (_, percent) in GENERATION_SCHEDULE {
            assert!(percent >= last);
            last = percent;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_generation_run_walks_every_step_in_order() {
        let start = Instant::now();
        let mut run = GenerationRun::start(start);
        let mut seen = vec![run.percent()];
        let mut now = start;

        // Poll well past the total runtime; one step per interval.
        for _ in 0..GENERATION_SCHEDULE.len() + 2 {
            now += GENERATION_STEP;
            run.poll(now);
            if *seen.last().unwrap() != run.percent() {
                seen.push(run.percent());
            }
        }

        let expected: Vec<u16> = GENERATION_SCHEDULE.iter().map(|(_, p)| *p).collect();
        assert_eq!(seen, expected);
        assert!(run.is_finished());
        assert_eq!(run.percent(), 100);
    }

    #[test]
    fn test_generation_run_advances_at_most_one_step_per_poll() {
        let start = Instant::now();
        let mut run = GenerationRun::start(start);
        // Even after a long stall, a single poll moves one step only.
        let late = start + GENERATION_STEP * 10;
        run.poll(late);
        assert_eq!(run.percent(), GENERATION_SCHEDULE[1].1);
    }
}
