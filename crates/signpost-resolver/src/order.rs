use signpost_core::CatalogEntry;

/// Orders catalog entries for the listing page.
///
/// Behavior-preserving port of the ordering pass in the deployed
/// redirector: a pair of entries trades places only when the earlier
/// entry compares less on BOTH hostname and port. The comparison is
/// not a total order, so this is not a lexicographic (hostname, port)
/// sort; pairs the comparison does not order keep their catalog order.
/// Downstream consumers may depend on the historical order, so do not
/// replace this with a regular sort.
pub fn order_entries(entries: &mut [CatalogEntry]) {
    for i in 1..entries.len() {
        let mut j = i;
        while j > 0 && both_less(&entries[j - 1], &entries[j]) {
            entries.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn both_less(a: &CatalogEntry, b: &CatalogEntry) -> bool {
    a.hostname < b.hostname && a.port < b.port
}
