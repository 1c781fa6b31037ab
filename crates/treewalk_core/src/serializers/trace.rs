use treewalk_dom::TreeNode;

use super::{current_tag, current_text, error_message};
use crate::{Event, Serializer, WalkContext};

type Ctx<N> = WalkContext<N, String>;

/// Writes a compact bracketed trace of every event.
///
/// ```text
/// {started}{tag opened: P}{text: Hello}{tag closed: P}{finished}
/// ```
pub fn trace<N: TreeNode>(serializer: &mut Serializer<N, String>) -> &mut Serializer<N, String> {
    serializer.on(Event::Start, |ctx: &mut Ctx<N>| {
        ctx.buffer = Some("{started}".to_string());
        Ok(())
    });
    serializer.on(Event::TagOpen, |ctx: &mut Ctx<N>| {
        let entry = format!("{{tag opened: {}}}", current_tag(ctx));
        ctx.buffer_mut().push_str(&entry);
        Ok(())
    });
    serializer.on(Event::Text, |ctx: &mut Ctx<N>| {
        let entry = format!("{{text: {}}}", current_text(ctx));
        ctx.buffer_mut().push_str(&entry);
        Ok(())
    });
    serializer.on(Event::TagClose, |ctx: &mut Ctx<N>| {
        let entry = format!("{{tag closed: {}}}", current_tag(ctx));
        ctx.buffer_mut().push_str(&entry);
        Ok(())
    });
    serializer.on(Event::Finish, |ctx: &mut Ctx<N>| {
        ctx.buffer_mut().push_str("{finished}");
        Ok(())
    });
    serializer.on(Event::Error, |ctx: &mut Ctx<N>| {
        let entry = format!("{{error: {}}}", error_message(ctx));
        ctx.buffer_mut().push_str(&entry);
        Ok(())
    });
    serializer
}
