use crate::Mapping;

/// Collects every key of the mapping. Order follows the map's own iteration
/// order, which is unspecified for hash maps.
pub fn map_keys<'a, M>(mapping: M) -> Vec<M::Key>
where
    M: Mapping<'a>,
    M::Key: Clone,
{
    let Some(entries) = mapping.into_entries() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(entries.len());
    for (key, _) in entries {
        out.push(key.clone());
    }
    out
}

/// Collects one value per key; equal values under distinct keys all appear.
pub fn map_values<'a, M>(mapping: M) -> Vec<M::Value>
where
    M: Mapping<'a>,
    M::Value: Clone,
{
    let Some(entries) = mapping.into_entries() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(entries.len());
    for (_, value) in entries {
        out.push(value.clone());
    }
    out
}
