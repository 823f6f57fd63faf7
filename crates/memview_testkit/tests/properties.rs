//! Property tests for the segment view against the flat model.

use bytes::Bytes;
use memview_core::{SegmentView, ViewConfig};
use memview_testkit::prelude::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(PropTestConfig::default().to_proptest_config())]

    #[test]
    fn read_matches_concatenation(
        layout in layout_strategy(8, 12),
        offset in 0usize..120,
        len in 0usize..120,
    ) {
        let model = FlatModel::new(&layout);
        let view = SegmentView::new(layout).unwrap();

        let expected = model.read(offset, len).map(<[u8]>::to_vec);
        prop_assert_eq!(view.read_at(offset, len).ok(), expected);
    }

    #[test]
    fn discard_shifts_every_offset(
        layout in layout_strategy(8, 12),
        n in 0usize..120,
        offset in 0usize..120,
        len in 0usize..120,
    ) {
        let mut view = SegmentView::new(layout).unwrap();
        let before = view.read_at(offset + n, len).ok();
        let size = view.len();

        view.discard_front(n);

        if n <= size {
            prop_assert_eq!(view.read_at(offset, len).ok(), before);
        } else {
            prop_assert!(view.is_empty());
        }
    }

    #[test]
    fn oversized_discard_clamps(layout in layout_strategy(8, 12), extra in 1usize..1000) {
        let mut view = SegmentView::new(layout).unwrap();
        let size = view.len();

        prop_assert_eq!(view.discard_front(size + extra), size);
        prop_assert_eq!(view.len(), 0);
        prop_assert!(view.read_at(0, 0).is_ok());
        prop_assert!(view.read_at(0, 1).is_err());
    }

    #[test]
    fn boundary_rejection(layout in layout_strategy(8, 12), k in 1usize..64) {
        let view = SegmentView::new(layout).unwrap();
        let size = view.len();

        prop_assert!(view.read_at(size, 0).unwrap().is_empty());
        prop_assert!(view.read_at(size, 1).is_err());
        prop_assert!(view.read_at(size + k, 0).is_err());
    }

    #[test]
    fn failed_reads_do_not_mutate(
        layout in layout_strategy(8, 12),
        offset in 0usize..200,
        len in 1usize..200,
    ) {
        let view = SegmentView::new(layout).unwrap();
        let size = view.len();
        let segments = view.segment_count();

        let mut dst = vec![0x5Au8; len];
        if view.read(offset, &mut dst).is_err() {
            prop_assert!(dst.iter().all(|b| *b == 0x5A));
        }
        prop_assert_eq!(view.len(), size);
        prop_assert_eq!(view.segment_count(), segments);
    }

    #[test]
    fn slices_concatenate_to_read(
        layout in layout_strategy(8, 12),
        offset in 0usize..120,
        len in 0usize..120,
    ) {
        let view = SegmentView::new(layout).unwrap();
        if let Ok(slices) = view.slices(offset, len) {
            let joined: Vec<u8> = slices.flat_map(|piece| piece.iter().copied()).collect();
            prop_assert!(slices_are_nonempty(&view, offset, len));
            prop_assert_eq!(joined, view.read_at(offset, len).unwrap());
        }
    }

    #[test]
    fn dropping_empty_segments_preserves_content(layout in layout_strategy(8, 12)) {
        let kept = SegmentView::new(layout.clone()).unwrap();
        let config = ViewConfig::new().drop_empty_segments(true);
        let dropped = SegmentView::with_config(&config, layout).unwrap();

        prop_assert_eq!(kept.len(), dropped.len());
        prop_assert!(dropped.segments().all(|segment| !segment.is_empty()));
        prop_assert_eq!(
            kept.read_at(0, kept.len()).unwrap(),
            dropped.read_at(0, dropped.len()).unwrap()
        );
    }

    #[test]
    fn chunked_layouts_read_like_one_buffer(
        size in 0usize..512,
        chunk in 1usize..64,
        offset in 0usize..512,
        len in 0usize..512,
    ) {
        let data = Bytes::from(pattern_data(size));
        let view = SegmentView::new(chunked_segments(&data, chunk)).unwrap();

        prop_assert_eq!(view.len(), size);
        prop_assert_eq!(view.segment_count(), size.div_ceil(chunk));
        let expected = offset
            .checked_add(len)
            .and_then(|end| data.get(offset..end))
            .map(<[u8]>::to_vec);
        prop_assert_eq!(view.read_at(offset, len).ok(), expected);
    }
}

proptest! {
    #![proptest_config(PropTestConfig::default().with_cases(64).to_proptest_config())]

    #[test]
    fn operation_sequences_match_model(
        layout in layout_strategy(8, 12),
        ops in operation_sequence_strategy(120, 1, 40),
    ) {
        let mut pair = ModelPair::new(layout).unwrap();
        for op in &ops {
            pair.apply(op);
            pair.assert_consistent();
        }
    }
}

fn slices_are_nonempty(view: &SegmentView, offset: usize, len: usize) -> bool {
    view.slices(offset, len)
        .map(|mut slices| slices.all(|piece| !piece.is_empty()))
        .unwrap_or(false)
}

#[test]
fn repeated_discards_on_empty_view_are_noops() {
    let mut view = canonical_view();
    view.discard_front(view.len());
    for count in [0, 1, 11, usize::MAX] {
        assert_eq!(view.discard_front(count), 0);
        assert!(view.is_empty());
        assert_eq!(view.segment_count(), 0);
    }
}

#[test]
fn canonical_scenario_against_model() {
    let mut pair = ModelPair::new(canonical_segments()).unwrap();
    let script = [
        ViewOperation::Read { offset: 3, len: 4 },
        ViewOperation::Discard { count: 2 },
        ViewOperation::Read { offset: 0, len: 4 },
        ViewOperation::Read { offset: 2, len: 7 },
        ViewOperation::Read { offset: 9, len: 1 },
        ViewOperation::Discard { count: 4 },
        ViewOperation::Read { offset: 0, len: 3 },
    ];
    let outcomes: Vec<Outcome> = script.iter().map(|op| pair.apply(op)).collect();

    assert_eq!(outcomes[2], Outcome::Read(Some(b"llow".to_vec())));
    assert_eq!(outcomes[3], Outcome::Read(Some(b"oworld!".to_vec())));
    assert_eq!(outcomes[4], Outcome::Read(None));
    assert_eq!(outcomes[6], Outcome::Read(Some(b"orl".to_vec())));
    pair.assert_consistent();
}

#[test]
fn discard_cost_tracks_retired_segments() {
    let segments: Vec<Vec<u8>> = (0..1000).map(|i| vec![(i % 256) as u8; 3]).collect();
    let mut view = SegmentView::new(segments).unwrap();

    view.discard_front(1500);
    assert_eq!(view.segment_count(), 500);
    assert_eq!(view.stats().snapshot().segments_retired, 500);

    view.discard_front(1);
    assert_eq!(view.segment_count(), 500);
    assert_eq!(view.segments().next().unwrap().len(), 2);
}
