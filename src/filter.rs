use crate::models::AccountRecord;

/// Keeps the users whose location contains `location`, ignoring case and
/// surrounding whitespace in the query. Order is preserved.
///
/// Users without a location never match a non-empty query.
pub fn filter_by_location<'a>(users: &'a [AccountRecord], location: &str) -> Vec<&'a AccountRecord> {
    let needle = location.trim().to_lowercase();

    users
        .iter()
        .filter(|user| {
            let haystack = user.location().unwrap_or_default().to_lowercase();
            haystack.contains(&needle)
        })
        .collect()
}

/// Number of users that have any location data at all.
pub fn count_with_location(users: &[AccountRecord]) -> usize {
    users.iter().filter(|user| user.location().is_some()).count()
}
