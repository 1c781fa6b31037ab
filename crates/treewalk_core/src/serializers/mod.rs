//! Built-in listener presets.
//!
//! Each preset registers a full set of listeners on a [`Serializer`] so the
//! walker output becomes a finished buffer:
//!
//! - [`outline`] - one line per event, `A tag is open: P`
//! - [`trace`] - compact bracketed trace, `{started}{tag opened: P}...`
//! - [`markup`] - re-serialized markup, `<p class="x">Hello</p>`
//! - [`event_log`] - one `event(node)` entry per event
//!
//! Every preset resets its buffer on `start` and also handles `error` by
//! appending the error message, so a failing walk still returns the output
//! produced so far.

mod event_log;
mod markup;
mod outline;
mod trace;

pub use event_log::event_log;
pub use markup::markup;
pub use outline::outline;
pub use trace::trace;

use treewalk_dom::TreeNode;

use crate::WalkContext;

/// Node names of the current node, upper-cased like DOM `nodeName`.
fn current_tag<N: TreeNode, B>(ctx: &WalkContext<N, B>) -> String {
    ctx.current()
        .map(|node| node.node_name().to_ascii_uppercase())
        .unwrap_or_default()
}

fn current_text<N: TreeNode, B>(ctx: &WalkContext<N, B>) -> String {
    ctx.current()
        .and_then(|node| node.text_content())
        .unwrap_or_default()
        .to_string()
}

fn error_message<N, B>(ctx: &WalkContext<N, B>) -> String {
    ctx.error
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default()
}
