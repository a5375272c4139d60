use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    /// Run an action and return its result with the elapsed wall-clock
    /// time in milliseconds.
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u64) {
        let start = Instant::now();
        let result = action();

        (result, start.elapsed().as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_returns_action_result() {
        let (value, elapsed) = TimeEstimation::estimate(|| 40 + 2);

        assert_eq!(value, 42);
        assert!(elapsed < 1000);
    }
}
