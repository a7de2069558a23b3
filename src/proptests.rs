// SPDX-License-Identifier: AGPL-3.0-or-later

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::Config;

use crate::cursor::{cursor_to_offset, offset_to_cursor, offset_with_default};
use crate::global_id::{from_global_id, to_global_id};
use crate::list::{list_from_array, list_from_array_slice, ArraySliceMetaInfo, ListArguments};

/// The maximum number of items in a generated array.
const MAX_ITEMS: usize = 20;

prop_compose! {
    /// Strategy for generating pagination arguments pointing around and inside of an array.
    fn arguments_strategy()
        (
            before in proptest::option::of(-3i64..(MAX_ITEMS as i64 + 3)),
            after in proptest::option::of(-3i64..(MAX_ITEMS as i64 + 3)),
            first in proptest::option::of(0usize..(MAX_ITEMS + 3)),
            last in proptest::option::of(0usize..(MAX_ITEMS + 3)),
        ) -> ListArguments {
        ListArguments {
            before: before.map(offset_to_cursor),
            after: after.map(offset_to_cursor),
            first,
            last,
        }
    }
}

proptest! {
    #![proptest_config(Config::with_cases(500))]

    #[test]
    fn cursor_offsets_survive_encoding(offset in any::<i64>()) {
        prop_assert_eq!(cursor_to_offset(&offset_to_cursor(offset)), Ok(offset));
    }

    #[test]
    fn global_ids_survive_encoding(type_name in "[A-Za-z][A-Za-z0-9_]{0,31}", id in ".*") {
        let resolved = from_global_id(&to_global_id(&type_name, &id)).unwrap();
        prop_assert_eq!(resolved.type_name, type_name);
        prop_assert_eq!(resolved.id, id);
    }

    #[test]
    fn windows_keep_order_and_bounds(
        data in vec(any::<u32>(), 0..MAX_ITEMS),
        args in arguments_strategy(),
    ) {
        let indexed: Vec<(usize, u32)> = data.iter().copied().enumerate().collect();
        let list = list_from_array(&indexed, &args);

        // Items are a contiguous, ordered run of the array
        for pair in list.items.windows(2) {
            prop_assert_eq!(pair[0].0 + 1, pair[1].0);
        }

        if let Some(first) = args.first {
            prop_assert!(list.items.len() <= first);
        }

        if let Some(last) = args.last {
            prop_assert!(list.items.len() <= last);
        }

        if args.first.is_none() {
            prop_assert!(!list.page_info.has_next_page);
        }

        if args.last.is_none() {
            prop_assert!(!list.page_info.has_previous_page);
        }

        match (list.items.first(), list.items.last()) {
            (Some((start, _)), Some((end, _))) => {
                prop_assert_eq!(list.page_info.start_cursor, Some(offset_to_cursor(*start as i64)));
                prop_assert_eq!(list.page_info.end_cursor, Some(offset_to_cursor(*end as i64)));
            }
            _ => {
                prop_assert_eq!(list.page_info.start_cursor, None);
                prop_assert_eq!(list.page_info.end_cursor, None);
            }
        }

        prop_assert_eq!(list.total_count, data.len());
    }

    #[test]
    fn covering_slices_match_full_array(
        data in vec(any::<u32>(), 0..MAX_ITEMS),
        args in arguments_strategy(),
        start_seed in any::<usize>(),
        end_seed in any::<usize>(),
    ) {
        // Any slice reaching from at or below the lower cursor bound up to at least the upper
        // one yields the same window as the full array, in both directions
        let full = list_from_array(&data, &args);
        let length = data.len() as i64;

        let lower = offset_with_default(args.after.as_ref(), -1)
            .saturating_add(1)
            .max(0)
            .min(length) as usize;
        let upper = offset_with_default(args.before.as_ref(), length)
            .min(length)
            .max(0) as usize;

        let slice_start = start_seed % (lower + 1);
        let min_end = upper.max(slice_start);
        let slice_end = min_end + end_seed % (data.len() - min_end + 1);
        let slice = &data[slice_start..slice_end];

        let sliced = list_from_array_slice(
            slice,
            &args,
            ArraySliceMetaInfo {
                slice_start,
                array_length: data.len(),
            },
        );

        prop_assert_eq!(sliced.items, full.items);
        prop_assert_eq!(sliced.page_info, full.page_info);
        prop_assert_eq!(sliced.total_count, slice.len());
    }
}
