//! Annotation merging.

use std::borrow::Cow;

use crate::entry::Data;

/// Merge call-site annotations over the defaults.
///
/// Returns one side untouched when the other is empty; otherwise a new map
/// where `data` wins on key collisions. Neither input is modified.
pub fn merged_data<'a>(defaults: &'a Data, data: Option<&'a Data>) -> Cow<'a, Data> {
    let data = match data {
        Some(data) if !data.is_empty() => data,
        _ => return Cow::Borrowed(defaults),
    };

    if defaults.is_empty() {
        return Cow::Borrowed(data);
    }

    let mut merged = defaults.clone();
    merged.extend(data.iter().map(|(k, v)| (k.clone(), v.clone())));
    Cow::Owned(merged)
}
