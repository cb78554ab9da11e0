use chrono::NaiveDate;

/// Closed range of calendar days `[first, last]`.
///
/// Iterating is lazy and can be restarted any number of times; an inverted
/// range is simply empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl DayRange {
    pub fn new(first: NaiveDate, last: NaiveDate) -> Self {
        Self { first, last }
    }

    /// Number of days in the range, 0 when inverted.
    pub fn len(&self) -> usize {
        ((self.last - self.first).num_days() + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.last < self.first
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.first <= day && day <= self.last
    }

    pub fn iter(&self) -> Days {
        Days {
            next: (!self.is_empty()).then_some(self.first),
            last: self.last,
        }
    }
}

impl IntoIterator for DayRange {
    type Item = NaiveDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.iter()
    }
}

impl IntoIterator for &DayRange {
    type Item = NaiveDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.iter()
    }
}

/// Iterator over the days of a [`DayRange`]
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let day = self.next?;
        // succ_opt is None only at NaiveDate::MAX, which also ends the range
        self.next = day.succ_opt().filter(|d| *d <= self.last);
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self
            .next
            .map_or(0, |d| DayRange::new(d, self.last).len());
        (n, Some(n))
    }
}

impl ExactSizeIterator for Days {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_day() {
        let r = DayRange::new(ymd(2024, 1, 2), ymd(2024, 1, 2));
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![ymd(2024, 1, 2)]);
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn inclusive_both_ends() {
        let r = DayRange::new(ymd(2024, 1, 1), ymd(2024, 1, 3));
        let days: Vec<_> = r.into_iter().collect();
        assert_eq!(days, vec![ymd(2024, 1, 1), ymd(2024, 1, 2), ymd(2024, 1, 3)]);
    }

    #[test]
    fn crosses_year_and_leap_day() {
        let r = DayRange::new(ymd(2023, 12, 30), ymd(2024, 3, 1));
        assert_eq!(r.iter().count(), 2 + 31 + 29 + 1);
        assert_eq!(r.len(), r.iter().count());
        assert!(r.iter().any(|d| d == ymd(2024, 2, 29)));
        assert_eq!(r.iter().last(), Some(ymd(2024, 3, 1)));
    }

    #[test]
    fn inverted_is_empty() {
        let r = DayRange::new(ymd(2024, 1, 5), ymd(2024, 1, 1));
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.iter().next(), None);
    }

    #[test]
    fn restartable() {
        let r = DayRange::new(ymd(2024, 5, 1), ymd(2024, 5, 10));
        let first: Vec<_> = r.iter().collect();
        let second: Vec<_> = (&r).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(r.iter().len(), 10);
    }

    #[test]
    fn ends_at_max_date() {
        let r = DayRange::new(NaiveDate::MAX.pred_opt().unwrap(), NaiveDate::MAX);
        assert_eq!(r.iter().count(), 2);
    }

    #[test]
    fn contains_bounds() {
        let r = DayRange::new(ymd(2024, 1, 1), ymd(2024, 1, 3));
        assert!(r.contains(ymd(2024, 1, 1)));
        assert!(r.contains(ymd(2024, 1, 3)));
        assert!(!r.contains(ymd(2024, 1, 4)));
    }
}
