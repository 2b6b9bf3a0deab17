use reportcfg_types::Filter;

/// Existing filters minus those `new` replaces.
///
/// A filter is replaced when it has the same type and level as `new` and
/// both apply to at least one common definition.
pub fn filter_same_type_existing_filters(existing: &[Filter], new: &Filter) -> Vec<Filter> {
    existing
        .iter()
        .filter(|filter| {
            !(filter.filter_type == new.filter_type
                && filter.filter_level == new.filter_level
                && filter.overlaps(new))
        })
        .cloned()
        .collect()
}
