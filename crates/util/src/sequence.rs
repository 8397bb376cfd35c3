//! Search and removal over ordered sequences.

/// Calls `f` on each element, front to back.
pub fn for_each<T, F>(seq: &[T], mut f: F)
where
    F: FnMut(&T),
{
    for item in seq {
        f(item);
    }
}

/// Returns the first element matching `predicate`, scanning back to front when
/// `reverse` is set. Stops at the first match.
///
/// # Examples
///
/// ```
/// use sdk_util::find_element;
///
/// let arr = [55, 66, 77];
/// assert_eq!(find_element(&arr, |_| true, false), Some(&55));
/// assert_eq!(find_element(&arr, |_| true, true), Some(&77));
/// assert_eq!(find_element(&arr, |_| false, false), None);
/// ```
pub fn find_element<T, P>(seq: &[T], predicate: P, reverse: bool) -> Option<&T>
where
    P: FnMut(&&T) -> bool,
{
    if reverse {
        seq.iter().rev().find(predicate)
    } else {
        seq.iter().find(predicate)
    }
}

/// Removes the first element matching `predicate` (in scan order) from `seq`.
///
/// Later elements shift down to close the gap. Returns `true` if an element was
/// removed; otherwise `seq` is left untouched.
///
/// # Examples
///
/// ```
/// use sdk_util::remove_element;
///
/// let mut arr = vec![55, 66, 77];
/// assert!(remove_element(&mut arr, |_| true, true));
/// assert_eq!(arr, vec![55, 66]);
/// ```
pub fn remove_element<T, P>(seq: &mut Vec<T>, mut predicate: P, reverse: bool) -> bool
where
    P: FnMut(&T) -> bool,
{
    let position = if reverse {
        seq.iter().rposition(&mut predicate)
    } else {
        seq.iter().position(&mut predicate)
    };
    match position {
        Some(index) => {
            seq.remove(index);
            tracing::trace!(index, reverse, "removed element");
            true
        }
        None => false,
    }
}
