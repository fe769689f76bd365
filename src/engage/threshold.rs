/// One-shot detector for a monotonic measure crossing fixed markers.
///
/// Each threshold fires at most once for the lifetime of the tracker; there
/// is no in-session reset. A full page reload constructs a fresh tracker.
#[derive(Clone, Debug)]
pub struct ThresholdTracker {
    thresholds: Vec<u32>,
    fired: Vec<bool>,
}

impl ThresholdTracker {
    pub fn new(thresholds: &[u32]) -> Self {
        let mut thresholds = thresholds.to_vec();
        thresholds.sort_unstable();
        thresholds.dedup();
        let fired = vec![false; thresholds.len()];
        Self { thresholds, fired }
    }

    /// Marks every not-yet-fired threshold `<= value` as fired and returns
    /// them in ascending order. Values may arrive out of order or repeat;
    /// a threshold is still reported exactly once.
    pub fn observe(&mut self, value: u32) -> Vec<u32> {
        let mut crossed = Vec::new();
        for (index, threshold) in self.thresholds.iter().enumerate() {
            if *threshold <= value && !self.fired[index] {
                self.fired[index] = true;
                crossed.push(*threshold);
            }
        }
        crossed
    }

    pub fn pending(&self) -> Vec<u32> {
        self.thresholds
            .iter()
            .zip(&self.fired)
            .filter(|(_, fired)| !**fired)
            .map(|(threshold, _)| *threshold)
            .collect()
    }

    pub fn is_exhausted(&self) -> bool {
        self.fired.iter().all(|fired| *fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_threshold_fires_exactly_once() {
        let mut tracker = ThresholdTracker::new(&[25, 50, 75, 90, 100]);
        assert_eq!(tracker.observe(60), vec![25, 50]);
        assert_eq!(tracker.observe(60), Vec::<u32>::new());
        assert_eq!(tracker.observe(100), vec![75, 90, 100]);
        assert!(tracker.is_exhausted());
        assert_eq!(tracker.observe(100), Vec::<u32>::new());
    }

    #[test]
    fn jumping_past_several_markers_reports_ascending() {
        let mut tracker = ThresholdTracker::new(&[30, 60, 120, 300]);
        assert_eq!(tracker.observe(150), vec![30, 60, 120]);
        assert_eq!(tracker.pending(), vec![300]);
    }

    #[test]
    fn non_monotonic_input_never_refires() {
        let mut tracker = ThresholdTracker::new(&[25, 50]);
        assert_eq!(tracker.observe(55), vec![25, 50]);
        assert_eq!(tracker.observe(10), Vec::<u32>::new());
        assert_eq!(tracker.observe(55), Vec::<u32>::new());
    }

    #[test]
    fn unsorted_input_thresholds_are_normalized() {
        let mut tracker = ThresholdTracker::new(&[100, 25, 50, 25]);
        assert_eq!(tracker.observe(100), vec![25, 50, 100]);
    }
}
