//! Property tests for the list engine.

use proptest::prelude::*;

use jurnal_shared::types::PageRequest;

use super::filter::FilterSet;
use super::page::page_of;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Concatenating every page's slice reconstructs the input exactly once.
    #[test]
    fn prop_pages_reconstruct_the_sequence(
        len in 0usize..200,
        per_page in 1u32..50,
    ) {
        let items: Vec<usize> = (0..len).collect();
        let (_, meta) = page_of(&items, &PageRequest { page: 1, per_page });

        let mut rebuilt = Vec::new();
        for page in 1..=meta.total_pages {
            let (slice, _) = page_of(&items, &PageRequest { page, per_page });
            rebuilt.extend_from_slice(slice);
        }

        prop_assert_eq!(rebuilt, items);
    }

    /// `total_pages` is ceil(len / per_page), with a floor of one page.
    #[test]
    fn prop_total_pages_formula(
        len in 0usize..500,
        per_page in 1u32..100,
    ) {
        let items: Vec<usize> = (0..len).collect();
        let (_, meta) = page_of(&items, &PageRequest { page: 1, per_page });

        let expected = (len as u64).div_ceil(u64::from(per_page)).max(1);
        prop_assert_eq!(u64::from(meta.total_pages), expected);
    }

    /// No page slice is ever longer than the page size.
    #[test]
    fn prop_no_page_exceeds_page_size(
        len in 0usize..200,
        per_page in 1u32..50,
        page in 1u32..20,
    ) {
        let items: Vec<usize> = (0..len).collect();
        let (slice, _) = page_of(&items, &PageRequest { page, per_page });
        prop_assert!(slice.len() <= per_page as usize);
    }

    /// A record survives the composed filter iff it satisfies every active
    /// criterion on its own.
    #[test]
    fn prop_filter_composition_is_and(
        values in prop::collection::vec((0u32..100, 0u32..100), 0..50),
        first_max in 0u32..100,
        second_max in 0u32..100,
    ) {
        #[derive(Debug, Clone, PartialEq)]
        struct Pair {
            a: u32,
            b: u32,
        }

        let records: Vec<Pair> = values.into_iter().map(|(a, b)| Pair { a, b }).collect();

        let first = move |r: &Pair| r.a <= first_max;
        let second = move |r: &Pair| r.b <= second_max;

        let filter = FilterSet::new()
            .equals(Some(true), move |r: &Pair| first(r))
            .equals(Some(true), move |r: &Pair| second(r));

        for record in &records {
            let expected = first(record) && second(record);
            prop_assert_eq!(filter.matches(record), expected);
        }
    }
}
