use treewalk_dom::TreeNode;

use super::{current_tag, current_text, error_message};
use crate::{Event, Serializer, WalkContext};

type Ctx<N> = WalkContext<N, String>;

/// Writes one human-readable line per tag and text node.
///
/// ```text
/// A tag is open: P
/// Text: Hello,
/// A tag is closed: P
/// ```
pub fn outline<N: TreeNode>(serializer: &mut Serializer<N, String>) -> &mut Serializer<N, String> {
    serializer.on(Event::Start, |ctx: &mut Ctx<N>| {
        ctx.buffer = Some(String::new());
        Ok(())
    });
    serializer.on(Event::TagOpen, |ctx: &mut Ctx<N>| {
        let line = format!("A tag is open: {}\n", current_tag(ctx));
        ctx.buffer_mut().push_str(&line);
        Ok(())
    });
    serializer.on(Event::Text, |ctx: &mut Ctx<N>| {
        let line = format!("Text: {}\n", current_text(ctx));
        ctx.buffer_mut().push_str(&line);
        Ok(())
    });
    serializer.on(Event::TagClose, |ctx: &mut Ctx<N>| {
        let line = format!("A tag is closed: {}\n", current_tag(ctx));
        ctx.buffer_mut().push_str(&line);
        Ok(())
    });
    serializer.on(Event::Error, |ctx: &mut Ctx<N>| {
        let line = format!("Error: {}\n", error_message(ctx));
        ctx.buffer_mut().push_str(&line);
        Ok(())
    });
    serializer
}
