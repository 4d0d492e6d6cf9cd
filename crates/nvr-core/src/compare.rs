//! Version ordering ("label compare").
//!
//! Identities are ordered by epoch, then version, then release; the first
//! field that differs decides. Name and arch are never compared: callers
//! match on name before asking which build is newer.

use std::cmp::Ordering;

use nvr_schema::{Epoch, Evr, Nvr, Nvra};

use crate::segment::{Segment, Segments};

/// Compare two version or release labels segment by segment.
///
/// - Separator runs only delimit segments; `1.0` equals `1_0`.
/// - Numeric segments compare by value (`09` equals `9`), and any numeric
///   segment outranks an alpha segment in the same position.
/// - Alpha segments compare by ASCII byte value, case-sensitively.
/// - A label with segments left over is greater than one that ran out,
///   unless the leftovers are a `~`, which sorts below everything.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use nvr_core::compare_labels;
///
/// assert_eq!(compare_labels("1.10", "1.9"), Ordering::Greater);
/// assert_eq!(compare_labels("1.0~rc1", "1.0"), Ordering::Less);
/// ```
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let mut left = Segments::new(a);
    let mut right = Segments::new(b);

    loop {
        let ordering = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (Some(Segment::Tilde), Some(Segment::Tilde)) => continue,
            (Some(Segment::Tilde), _) => Ordering::Less,
            (_, Some(Segment::Tilde)) | (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (Some(x), Some(y)) => compare_segments(x, y),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn compare_segments(a: Segment<'_>, b: Segment<'_>) -> Ordering {
    match (a, b) {
        (Segment::Numeric(x), Segment::Numeric(y)) => {
            let x = x.trim_start_matches('0');
            let y = y.trim_start_matches('0');
            x.len().cmp(&y.len()).then_with(|| x.cmp(y))
        }
        (Segment::Alpha(x), Segment::Alpha(y)) => x.cmp(y),
        (Segment::Numeric(_), Segment::Alpha(_)) => Ordering::Greater,
        (Segment::Alpha(_), Segment::Numeric(_)) => Ordering::Less,
        // Tildes are resolved by the caller before reaching here.
        (Segment::Tilde, _) | (_, Segment::Tilde) => Ordering::Equal,
    }
}

/// Compare two optional epochs; a missing epoch counts as zero.
pub fn compare_epochs(a: Option<&Epoch>, b: Option<&Epoch>) -> Ordering {
    let zero = Epoch::zero();
    a.unwrap_or(&zero).cmp_numeric(b.unwrap_or(&zero))
}

/// Order two EVRs: epoch, then version, then release.
pub fn compare_evr(a: &Evr, b: &Evr) -> Ordering {
    compare_epochs(a.epoch(), b.epoch())
        .then_with(|| compare_labels(a.version(), b.version()))
        .then_with(|| compare_labels(a.release(), b.release()))
}

/// Order two NVRs by their EVR only.
pub fn compare_nvr(a: &Nvr, b: &Nvr) -> Ordering {
    compare_evr(a.evr(), b.evr())
}

/// Order two NVRAs by their EVR only.
pub fn compare_nvra(a: &Nvra, b: &Nvra) -> Ordering {
    compare_evr(a.evr(), b.evr())
}

/// Map an ordering to the `-1`/`0`/`1` convention used by `rpmvercmp`.
pub fn ordering_to_int(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Sort records oldest first. The sort is stable, so records with equal
/// EVRs keep their input order.
pub fn sort_by_evr<T: AsRef<Evr>>(records: &mut [T]) {
    records.sort_by(|a, b| compare_evr(a.as_ref(), b.as_ref()));
}

/// The newest record by EVR. When several tie, the last one wins.
pub fn newest<'a, T, I>(records: I) -> Option<&'a T>
where
    T: AsRef<Evr> + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records
        .into_iter()
        .max_by(|a, b| compare_evr((*a).as_ref(), (*b).as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evr(epoch: Option<&str>, version: &str, release: &str) -> Evr {
        Evr::new(epoch.map(|e| Epoch::new(e).unwrap()), version, release).unwrap()
    }

    #[test]
    fn test_compare_labels_basic() {
        assert_eq!(compare_labels("1.0", "1.0"), Ordering::Equal);
        assert_eq!(compare_labels("1.0", "2.0"), Ordering::Less);
        assert_eq!(compare_labels("2.0", "1.0"), Ordering::Greater);
        assert_eq!(compare_labels("2.0", "2.0.1"), Ordering::Less);
        assert_eq!(compare_labels("2.0.1", "2.0"), Ordering::Greater);
        assert_eq!(compare_labels("5.0.1", "5.0.1a"), Ordering::Less);
        assert_eq!(compare_labels("5.0.a1", "5.0.a2"), Ordering::Less);
        assert_eq!(compare_labels("10abc", "10.1abc"), Ordering::Less);
        assert_eq!(compare_labels("8.0", "8.0.rc1"), Ordering::Less);
        assert_eq!(compare_labels("10b2", "10a1"), Ordering::Greater);
        assert_eq!(compare_labels("6.6p1", "7.5p1"), Ordering::Less);
        assert_eq!(compare_labels("6.5p1", "6.5p10"), Ordering::Less);
        assert_eq!(compare_labels("abc10", "abc10.1"), Ordering::Less);
        assert_eq!(compare_labels("1.0a", "1.0aa"), Ordering::Less);
    }

    #[test]
    fn test_numeric_segments_by_value() {
        assert_eq!(compare_labels("09", "9"), Ordering::Equal);
        assert_eq!(compare_labels("10.0001", "10.1"), Ordering::Equal);
        assert_eq!(compare_labels("10.0001", "10.0039"), Ordering::Less);
        assert_eq!(compare_labels("10.1", "10.10001"), Ordering::Less);
        assert_eq!(compare_labels("10.1111", "10.10001"), Ordering::Less);
        assert_eq!(compare_labels("20240521", "202405210"), Ordering::Less);
        assert_eq!(
            compare_labels("99999999999999999999999", "100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn test_digit_outranks_alpha() {
        assert_eq!(compare_labels("abc.4", "8"), Ordering::Less);
        assert_eq!(compare_labels("2", "abc.4"), Ordering::Greater);
        assert_eq!(compare_labels("1.1", "1.a"), Ordering::Greater);
    }

    #[test]
    fn test_alpha_is_case_sensitive() {
        assert_eq!(compare_labels("1.A", "1.a"), Ordering::Less);
        assert_eq!(compare_labels("1.Z", "1.a"), Ordering::Less);
    }

    #[test]
    fn test_separators_only_delimit() {
        assert_eq!(compare_labels("1.0", "1_0"), Ordering::Equal);
        assert_eq!(compare_labels("1..0", "1.0"), Ordering::Equal);
        assert_eq!(compare_labels("1.0.", "1.0"), Ordering::Equal);
        assert_eq!(compare_labels("1.0", "1.0+"), Ordering::Equal);
    }

    #[test]
    fn test_tilde_sorts_lowest() {
        assert_eq!(compare_labels("1.0~rc1", "1.0"), Ordering::Less);
        assert_eq!(compare_labels("1.0", "1.0~rc1"), Ordering::Greater);
        assert_eq!(compare_labels("1.0~rc1", "1.0~rc2"), Ordering::Less);
        assert_eq!(compare_labels("1.0~rc1", "1.0~rc1"), Ordering::Equal);
        assert_eq!(compare_labels("1.0~~", "1.0~"), Ordering::Less);
        assert_eq!(compare_labels("1.0~", "1.0a"), Ordering::Less);
        assert_eq!(compare_labels("~1", "0"), Ordering::Less);
    }

    #[test]
    fn test_field_priority() {
        let a = evr(Some("1"), "1", "1");
        assert_eq!(compare_evr(&a, &a), Ordering::Equal);
        assert_eq!(
            compare_evr(&a, &evr(Some("1"), "0", "1")),
            Ordering::Greater,
        );
        assert_eq!(compare_evr(&a, &evr(Some("1"), "2", "1")), Ordering::Less);
        assert_eq!(
            compare_evr(&a, &evr(Some("1"), "1", "0")),
            Ordering::Greater,
        );
        assert_eq!(compare_evr(&a, &evr(Some("1"), "1", "2")), Ordering::Less);
        assert_eq!(
            compare_evr(&a, &evr(Some("0"), "1", "1")),
            Ordering::Greater,
        );
        assert_eq!(compare_evr(&a, &evr(Some("2"), "1", "1")), Ordering::Less);
        // epoch beats version
        assert_eq!(
            compare_evr(&evr(Some("1"), "1.0", "1"), &evr(None, "9.9", "9")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_missing_epoch_is_zero() {
        let with = evr(Some("1"), "1", "1");
        let without = evr(None, "1", "1");
        assert_eq!(compare_evr(&without, &with), Ordering::Less);
        assert_eq!(
            compare_evr(&without, &evr(Some("0"), "1", "1")),
            Ordering::Equal
        );
        assert_eq!(
            compare_evr(&evr(Some("10"), "1", "1"), &evr(Some("9"), "1", "1")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_empty_release() {
        assert_eq!(
            compare_evr(&evr(None, "1", ""), &evr(None, "1", "1")),
            Ordering::Less
        );
        assert_eq!(
            compare_evr(&evr(None, "1", ""), &evr(None, "1", "")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_name_and_arch_ignored() {
        let a = Nvra::from_parts("foo", None, "1", "1", "i386").unwrap();
        let b = Nvra::from_parts("bar", None, "1", "1", "x86_64").unwrap();
        assert_eq!(compare_nvra(&a, &b), Ordering::Equal);
        assert_eq!(compare_nvr(a.nvr(), b.nvr()), Ordering::Equal);
    }

    #[test]
    fn test_ordering_to_int() {
        assert_eq!(ordering_to_int(Ordering::Less), -1);
        assert_eq!(ordering_to_int(Ordering::Equal), 0);
        assert_eq!(ordering_to_int(Ordering::Greater), 1);
    }

    #[test]
    fn test_sort_and_newest() {
        let mut records = vec![
            Nvr::from_parts("a", None, "1.10", "1").unwrap(),
            Nvr::from_parts("a", Some(Epoch::from(1)), "0.1", "1").unwrap(),
            Nvr::from_parts("a", None, "1.9", "1").unwrap(),
            Nvr::from_parts("a", None, "1.10~rc1", "1").unwrap(),
        ];
        let latest = newest(&records).unwrap().clone();
        assert_eq!(latest.version(), "0.1");

        sort_by_evr(&mut records);
        let versions: Vec<_> = records.iter().map(Nvr::version).collect();
        assert_eq!(versions, ["1.9", "1.10~rc1", "1.10", "0.1"]);

        let empty: Vec<Evr> = Vec::new();
        assert!(newest(&empty).is_none());
    }
}
