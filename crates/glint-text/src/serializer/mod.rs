//! Generic serialization engine.
//!
//! The engine walks a component tree depth-first and drives an adapter
//! implementing [`TextSerializer`]. For every node it:
//!
//! 1. pushes the node onto the component stack,
//! 2. pushes the accumulator returned by [`next`](TextSerializer::next),
//! 3. calls [`write`](TextSerializer::write),
//! 4. walks the children left to right,
//! 5. calls [`end`](TextSerializer::end),
//! 6. pops the node and its accumulator.
//!
//! A top-level call creates a fresh [`SerializationContext`], pushes a root
//! accumulator, walks the tree and hands the context to
//! [`finalize`](TextSerializer::finalize).
//!
//! Two walks are provided with identical callback order: the recursive
//! [`serialize_node`](TextSerializer::serialize_node), and
//! [`serialize_iterative`](TextSerializer::serialize_iterative) which keeps
//! its own work list and so handles trees of any depth.

mod context;
mod worklist;

pub use context::SerializationContext;

use crate::component::Component;
use crate::context::Context;

/// An output adapter plugged into the serialization engine.
///
/// # Example
///
/// A minimal adapter collecting plain text:
///
/// ```rust
/// use glint_text::{Component, SerializationContext, TextSerializer};
///
/// struct Plain;
///
/// impl TextSerializer for Plain {
///     type Accumulator = String;
///     type Output = String;
///
///     fn new_accumulator(&self) -> String {
///         String::new()
///     }
///
///     fn next(&self, _ctx: &mut SerializationContext<'_, String>) -> String {
///         String::new()
///     }
///
///     fn write(&self, ctx: &mut SerializationContext<'_, String>) {
///         if let Some(text) = ctx.text() {
///             if let Some(buffer) = ctx.accumulator_mut() {
///                 buffer.push_str(&text);
///             }
///         }
///     }
///
///     fn end(&self, ctx: &mut SerializationContext<'_, String>) {
///         if let Some((parent, child)) = ctx.split_accumulators() {
///             parent.push_str(child);
///         }
///     }
///
///     fn finalize(&self, ctx: SerializationContext<'_, String>) -> String {
///         ctx.into_root().unwrap_or_default()
///     }
/// }
///
/// let tree = Component::literal("a").with_child("b").with_child("c");
/// assert_eq!(Plain.serialize(&tree), "abc");
/// ```
pub trait TextSerializer {
    /// Per-node state collecting one subtree's output.
    type Accumulator;
    /// The final result handed to the caller.
    type Output;

    /// Creates the walk state for one top-level call.
    fn new_context<'a>(
        &self,
        services: &'a Context,
    ) -> SerializationContext<'a, Self::Accumulator> {
        SerializationContext::new(services)
    }

    /// Creates the root accumulator.
    fn new_accumulator(&self) -> Self::Accumulator;

    /// Creates the accumulator for the node about to be visited.
    ///
    /// The node is already on the component stack.
    fn next(&self, ctx: &mut SerializationContext<'_, Self::Accumulator>) -> Self::Accumulator;

    /// Emits the current node's own contribution.
    fn write(&self, ctx: &mut SerializationContext<'_, Self::Accumulator>);

    /// Closes the current node after all of its descendants completed.
    fn end(&self, ctx: &mut SerializationContext<'_, Self::Accumulator>);

    /// Produces the result from the finished walk.
    fn finalize(&self, ctx: SerializationContext<'_, Self::Accumulator>) -> Self::Output;

    /// Serializes `node` with no services registered.
    fn serialize(&self, node: &Component) -> Self::Output {
        self.serialize_with(node, &Context::new())
    }

    /// Serializes `node`, resolving text through `services`.
    fn serialize_with<'a>(&self, node: &'a Component, services: &'a Context) -> Self::Output {
        let mut ctx = self.new_context(services);
        ctx.push_accumulator(self.new_accumulator());
        self.serialize_node(&mut ctx, node);
        self.finalize(ctx)
    }

    /// Recursively walks `node` and its subtree.
    fn serialize_node<'a>(
        &self,
        ctx: &mut SerializationContext<'a, Self::Accumulator>,
        node: &'a Component,
    ) {
        enter(self, ctx, node);
        for child in node.children() {
            self.serialize_node(ctx, child);
        }
        exit(self, ctx);
    }

    /// Serializes `node` without recursion.
    ///
    /// Produces exactly the same callback sequence as
    /// [`serialize`](Self::serialize).
    fn serialize_iterative(&self, node: &Component) -> Self::Output {
        self.serialize_iterative_with(node, &Context::new())
    }

    /// Non-recursive form of [`serialize_with`](Self::serialize_with).
    fn serialize_iterative_with<'a>(
        &self,
        node: &'a Component,
        services: &'a Context,
    ) -> Self::Output {
        let mut ctx = self.new_context(services);
        ctx.push_accumulator(self.new_accumulator());
        worklist::walk(self, &mut ctx, node);
        self.finalize(ctx)
    }
}

fn enter<'a, S>(serializer: &S, ctx: &mut SerializationContext<'a, S::Accumulator>, node: &'a Component)
where
    S: TextSerializer + ?Sized,
{
    log::trace!("enter {} at depth {}", node.kind(), ctx.depth());
    ctx.push_component(node);
    let accumulator = serializer.next(ctx);
    ctx.push_accumulator(accumulator);
    serializer.write(ctx);
}

fn exit<S>(serializer: &S, ctx: &mut SerializationContext<'_, S::Accumulator>)
where
    S: TextSerializer + ?Sized,
{
    serializer.end(ctx);
    ctx.pop_component();
    ctx.pop_accumulator();
}
