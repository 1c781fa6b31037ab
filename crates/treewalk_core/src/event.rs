//! Lifecycle events fired during a walk.

use std::str::FromStr;

use crate::WalkError;

/// The fixed set of events a walker fires.
///
/// ```text
/// Start
///   TagOpen(div)
///     Text("Hello")
///   TagClose(div)
/// Finish
/// ```
///
/// `Error` fires instead of the remaining events when a step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Fired once, before any node is visited.
    Start,
    /// Fired when an element is entered.
    TagOpen,
    /// Fired for each text node.
    Text,
    /// Fired when an element is left, after all of its descendants.
    TagClose,
    /// Fired once, after all nodes have been visited.
    Finish,
    /// Fired when any of the above fails.
    Error,
}

impl Event {
    /// Number of distinct events.
    pub const COUNT: usize = 6;

    /// All events, in firing order.
    pub const ALL: [Event; Event::COUNT] = [
        Event::Start,
        Event::TagOpen,
        Event::Text,
        Event::TagClose,
        Event::Finish,
        Event::Error,
    ];

    /// Returns the canonical name of this event.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Event::Start => "start",
            Event::TagOpen => "tagOpen",
            Event::Text => "text",
            Event::TagClose => "tagClose",
            Event::Finish => "finish",
            Event::Error => "error",
        }
    }

    /// Returns the `on`-prefixed name of this event (`onTagOpen`).
    #[inline]
    pub const fn prefixed_name(&self) -> &'static str {
        match self {
            Event::Start => "onStart",
            Event::TagOpen => "onTagOpen",
            Event::Text => "onText",
            Event::TagClose => "onTagClose",
            Event::Finish => "onFinish",
            Event::Error => "onError",
        }
    }

    /// Returns the slot of this event in per-event tables.
    #[inline]
    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Event {
    type Err = WalkError;

    /// Parses an event name.
    ///
    /// Accepts the canonical names (`tagOpen`) and the `on`-prefixed
    /// spelling (`onTagOpen`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Event::ALL
            .into_iter()
            .find(|event| event.name() == s || event.prefixed_name() == s)
            .ok_or_else(|| {
                WalkError::invalid_argument(
                    "eventName",
                    format!("the required event \"{}\" is not supported", s),
                )
            })
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("start", Event::Start)]
    #[case("tagOpen", Event::TagOpen)]
    #[case("text", Event::Text)]
    #[case("tagClose", Event::TagClose)]
    #[case("finish", Event::Finish)]
    #[case("error", Event::Error)]
    #[case::legacy_start("onStart", Event::Start)]
    #[case::legacy_tag_open("onTagOpen", Event::TagOpen)]
    #[case::legacy_error("onError", Event::Error)]
    fn parses_known_names(#[case] name: &str, #[case] expected: Event) {
        assert_eq!(name.parse::<Event>().unwrap(), expected);
    }

    #[rstest]
    #[case::unknown("click")]
    #[case::empty("")]
    #[case::wrong_case("TAGOPEN")]
    #[case::lowercase_legacy("ontagopen")]
    #[case::bare_prefix("on")]
    fn rejects_unknown_names(#[case] name: &str) {
        let err = name.parse::<Event>().unwrap_err();
        assert_eq!(err.param(), Some("eventName"));
    }

    #[test]
    fn display_is_canonical_name() {
        for event in Event::ALL {
            assert_eq!(event.to_string(), event.name());
            assert_eq!(event.to_string().parse::<Event>().unwrap(), event);
        }
    }

    #[test]
    fn indices_are_dense() {
        let indices: Vec<_> = Event::ALL.iter().map(Event::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }
}
