//! Non-recursive walk driving the same callbacks as the recursive one.

use super::{enter, exit, SerializationContext, TextSerializer};
use crate::component::Component;

enum Step<'a> {
    Enter(&'a Component),
    Exit,
}

/// Walks `root` with an explicit work list.
///
/// Children are pushed in reverse so they are entered left to right, and
/// each node's `Exit` sits below its children so `end` runs after all of
/// them completed.
pub(super) fn walk<'a, S>(
    serializer: &S,
    ctx: &mut SerializationContext<'a, S::Accumulator>,
    root: &'a Component,
) where
    S: TextSerializer + ?Sized,
{
    let mut steps = vec![Step::Enter(root)];
    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(node) => {
                enter(serializer, ctx, node);
                steps.push(Step::Exit);
                steps.extend(node.children().iter().rev().map(Step::Enter));
            }
            Step::Exit => exit(serializer, ctx),
        }
    }
}
