//! Demo command implementation.
//!
//! Walks through the canonical three-segment layout, printing every step.

use memview_core::{SegmentView, ViewResult};

/// One step of the walkthrough.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    /// A read and its outcome (`None` if rejected).
    Read {
        /// Logical offset.
        offset: usize,
        /// Requested length.
        len: usize,
        /// Bytes read.
        data: Option<Vec<u8>>,
    },
    /// A discard and the resulting view size.
    Discard {
        /// Requested count.
        count: usize,
        /// View size afterwards.
        remaining: usize,
    },
}

/// Runs the walkthrough and returns each step.
pub fn execute() -> ViewResult<Vec<Step>> {
    let mut view = SegmentView::new(["hello", "world", "!"])?;
    let mut steps = Vec::new();

    let read = |view: &SegmentView, offset: usize, len: usize| Step::Read {
        offset,
        len,
        data: view.read_at(offset, len).ok(),
    };

    // Across one segment boundary
    steps.push(read(&view, 3, 4));

    // Within the first segment
    view.discard_front(2);
    steps.push(Step::Discard {
        count: 2,
        remaining: view.len(),
    });
    steps.push(read(&view, 0, 4));

    // Across two segment boundaries, then past the end
    steps.push(read(&view, 2, 7));
    steps.push(read(&view, 9, 1));

    // Through the first segment and into the second
    view.discard_front(4);
    steps.push(Step::Discard {
        count: 4,
        remaining: view.len(),
    });
    steps.push(read(&view, 0, 3));

    Ok(steps)
}

/// Runs the demo command.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Segments: \"hello\" \"world\" \"!\"");
    for step in execute()? {
        match step {
            Step::Read {
                offset,
                len,
                data: Some(data),
            } => println!(
                "read({offset}, {len}) -> {:?}",
                String::from_utf8_lossy(&data)
            ),
            Step::Read {
                offset,
                len,
                data: None,
            } => println!("read({offset}, {len}) -> out of range"),
            Step::Discard { count, remaining } => {
                println!("discard_front({count}) -> {remaining} bytes left")
            }
        }
    }
    Ok(())
}
