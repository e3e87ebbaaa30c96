//! Comparator helpers shared by every ordered container.
//!
//! A comparator is a plain `Fn(&T, &T) -> i32` whose sign gives the order of
//! its arguments: negative when `a < b`, zero when they are equal, positive
//! when `a > b`. It must be a total preorder; a comparator that is not
//! antisymmetric leaves the containers in an unspecified (but memory safe)
//! shape.
//!
//! The binary heap accepts the `less(a, b) -> bool` cousin instead; the two
//! forms are interchangeable through [`less_from`] and [`compare_from_less`].

use std::cmp::Ordering;

/// Comparator trait object.
pub type Comparator<T> = dyn Fn(&T, &T) -> i32;

/// Comparator for totally ordered types.
pub fn natural<T: Ord + ?Sized>(a: &T, b: &T) -> i32 {
    from_ordering(a.cmp(b))
}

/// Comparator for partially ordered types.
///
/// Incomparable values (e.g. `NaN`) compare as greater, which keeps them at
/// the right end of an index instead of corrupting it.
pub fn partial<T: PartialOrd + ?Sized>(a: &T, b: &T) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Reverses the order imposed by `comparator`.
pub fn reverse<T, C>(comparator: C) -> impl Fn(&T, &T) -> i32
where
    C: Fn(&T, &T) -> i32,
{
    move |a, b| comparator(b, a)
}

/// Orders values by a projected key.
pub fn by_key<T, K, F>(key_of: F) -> impl Fn(&T, &T) -> i32
where
    K: Ord,
    F: Fn(&T) -> K,
{
    move |a, b| natural(&key_of(a), &key_of(b))
}

/// Builds a strict `less` predicate out of a comparator.
pub fn less_from<T, C>(comparator: C) -> impl Fn(&T, &T) -> bool
where
    C: Fn(&T, &T) -> i32,
{
    move |a, b| comparator(a, b) < 0
}

/// Builds a comparator out of a strict `less` predicate.
pub fn compare_from_less<T, L>(less: L) -> impl Fn(&T, &T) -> i32
where
    L: Fn(&T, &T) -> bool,
{
    move |a, b| {
        if less(a, b) {
            -1
        } else if less(b, a) {
            1
        } else {
            0
        }
    }
}

#[inline]
pub fn to_ordering(cmp: i32) -> Ordering {
    cmp.cmp(&0)
}

#[inline]
pub fn from_ordering(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_signs() {
        assert_eq!(natural(&1, &2), -1);
        assert_eq!(natural(&2, &2), 0);
        assert_eq!(natural(&3, &2), 1);
        assert_eq!(natural("a", "b"), -1);
    }

    #[test]
    fn partial_handles_floats() {
        assert_eq!(partial(&1.5, &2.5), -1);
        assert_eq!(partial(&2.5, &2.5), 0);
        assert_eq!(partial(&f64::NAN, &0.0), 1);
    }

    #[test]
    fn reverse_flips_sign() {
        let cmp = reverse(natural::<i32>);
        assert_eq!(cmp(&1, &2), 1);
        assert_eq!(cmp(&2, &1), -1);
        assert_eq!(cmp(&7, &7), 0);
    }

    #[test]
    fn by_key_projects() {
        let cmp = by_key(|s: &&str| s.len());
        assert_eq!(cmp(&"aa", &"b"), 1);
        assert_eq!(cmp(&"aa", &"bb"), 0);
    }

    #[test]
    fn less_and_compare_are_inverse() {
        let less = less_from(natural::<i32>);
        assert!(less(&1, &2));
        assert!(!less(&2, &2));

        let cmp = compare_from_less(|a: &i32, b: &i32| a < b);
        assert_eq!(cmp(&1, &2), -1);
        assert_eq!(cmp(&2, &1), 1);
        assert_eq!(cmp(&2, &2), 0);
    }

    #[test]
    fn ordering_conversions() {
        assert_eq!(to_ordering(-17), Ordering::Less);
        assert_eq!(to_ordering(0), Ordering::Equal);
        assert_eq!(to_ordering(3), Ordering::Greater);
        assert_eq!(from_ordering(Ordering::Greater), 1);
    }
}
