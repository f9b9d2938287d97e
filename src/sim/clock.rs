/// An hour counter that runs once from 0 to a fixed total.
///
/// The clock cannot be rewound; once exhausted it keeps returning `None`.
///
/// # Examples
///
/// ```
/// use lunar_charge_sim::sim::clock::Clock;
///
/// let clock = Clock::new(3);
/// assert_eq!(clock.collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Clock {
    /// Next hour to hand out
    current: usize,
    /// Total hours in the run
    total: usize,
}

impl Clock {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    /// Advances the clock by one hour.
    ///
    /// # Returns
    ///
    /// * `Some(hour)` - The hour about to be simulated (starting from 0)
    /// * `None` - If every hour has been handed out
    pub fn tick(&mut self) -> Option<usize> {
        if self.current < self.total {
            let hour = self.current;
            self.current += 1;
            Some(hour)
        } else {
            None
        }
    }

    /// Hours not yet handed out.
    pub fn remaining(&self) -> usize {
        self.total - self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.total
    }
}

impl Iterator for Clock {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.tick()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for Clock {}

impl std::iter::FusedIterator for Clock {}
