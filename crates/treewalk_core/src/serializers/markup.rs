use treewalk_dom::TreeNode;

use super::{current_text, error_message};
use crate::{Event, Serializer, WalkContext};

type Ctx<N> = WalkContext<N, String>;

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

fn open_tag<N: TreeNode>(node: &N) -> String {
    let mut tag = format!("<{}", node.node_name());
    for attr in node.attributes() {
        tag.push_str(&format!(" {}=\"{}\"", attr.name, escape_attribute(attr.value)));
    }
    tag.push('>');
    tag
}

/// Re-serializes elements and text as markup.
///
/// Tag names are written as the host reports them, text and attribute
/// values are escaped. Every element gets an explicit closing tag.
pub fn markup<N: TreeNode>(serializer: &mut Serializer<N, String>) -> &mut Serializer<N, String> {
    serializer.on(Event::Start, |ctx: &mut Ctx<N>| {
        ctx.buffer = Some(String::new());
        Ok(())
    });
    serializer.on(Event::TagOpen, |ctx: &mut Ctx<N>| {
        let tag = ctx.current().map(open_tag).unwrap_or_default();
        ctx.buffer_mut().push_str(&tag);
        Ok(())
    });
    serializer.on(Event::Text, |ctx: &mut Ctx<N>| {
        let text = escape_text(&current_text(ctx));
        ctx.buffer_mut().push_str(&text);
        Ok(())
    });
    serializer.on(Event::TagClose, |ctx: &mut Ctx<N>| {
        let tag = ctx
            .current()
            .map(|node| format!("</{}>", node.node_name()))
            .unwrap_or_default();
        ctx.buffer_mut().push_str(&tag);
        Ok(())
    });
    serializer.on(Event::Error, |ctx: &mut Ctx<N>| {
        let comment = format!("<!-- error: {} -->", error_message(ctx));
        ctx.buffer_mut().push_str(&comment);
        Ok(())
    });
    serializer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{WalkOptions, Walker};
    use rstest::rstest;
    use treewalk_dom::DomArena;

    #[test]
    fn test_markup_round_trips_elements() {
        let arena = DomArena::new();
        let link = arena.element_with_attributes(
            "a",
            &[("href", "/q?a=1&b=\"2\"")],
            &[*arena.text("Tom & Jerry")],
        );
        let root = arena.element("p", &[*arena.text("See "), *link, *arena.comment("x")]);

        let mut serializer = Serializer::new();
        markup(&mut serializer);
        let mut walker = Walker::new(root, &serializer, WalkOptions::new().ignore_root_node(false));
        walker.walk().unwrap();

        insta::assert_snapshot!(
            walker.into_results().unwrap(),
            @r#"<p>See <a href="/q?a=1&amp;b=&quot;2&quot;">Tom &amp; Jerry</a></p>"#
        );
    }

    #[rstest]
    #[case::plain("abc", "abc")]
    #[case::ampersand("a&b", "a&amp;b")]
    #[case::tags("<b>", "&lt;b&gt;")]
    #[case::quote_kept("\"q\"", "\"q\"")]
    fn test_escape_text(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_text(input), expected);
    }
}
