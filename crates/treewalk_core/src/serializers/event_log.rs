use treewalk_dom::{NodeKind, TreeNode};

use super::error_message;
use crate::{Event, Serializer, WalkContext};

type Ctx<N> = WalkContext<N, Vec<String>>;

fn entry<N: TreeNode>(event: Event, ctx: &Ctx<N>) -> String {
    match ctx.current() {
        Some(node) if node.node_kind() == NodeKind::Text => {
            format!("{}({:?})", event, node.text_content().unwrap_or_default())
        }
        Some(node) => format!("{}({})", event, node.node_name()),
        None => event.to_string(),
    }
}

/// Records one entry per event: `start`, `tagOpen(div)`, `text("Hi")`,
/// `tagClose(div)`, `finish`, `error(<message>)`.
pub fn event_log<N: TreeNode>(
    serializer: &mut Serializer<N, Vec<String>>,
) -> &mut Serializer<N, Vec<String>> {
    serializer.on(Event::Start, |ctx: &mut Ctx<N>| {
        ctx.buffer = Some(vec![Event::Start.to_string()]);
        Ok(())
    });
    for event in [Event::TagOpen, Event::Text, Event::TagClose, Event::Finish] {
        serializer.on(event, move |ctx: &mut Ctx<N>| {
            let line = entry(event, ctx);
            ctx.buffer_mut().push(line);
            Ok(())
        });
    }
    serializer.on(Event::Error, |ctx: &mut Ctx<N>| {
        let line = format!("{}({})", Event::Error, error_message(ctx));
        ctx.buffer_mut().push(line);
        Ok(())
    });
    serializer
}
