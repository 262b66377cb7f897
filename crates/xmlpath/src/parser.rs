//! A `nom`-based parser for dotted XML path expressions.
use crate::ast::{PathExpression, PathSegment};
use crate::error::XmlPathError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_until},
    character::complete::char,
    combinator::{all_consuming, map, rest, verify},
    sequence::{delimited, preceded, separated_pair},
};

// --- Main Public Parser ---

pub fn parse_path(input: &str) -> Result<PathExpression, XmlPathError> {
    let source = input.trim();
    if source.is_empty() {
        return Err(XmlPathError::EmptyPath);
    }

    let segments = split_segments(source)
        .into_iter()
        .enumerate()
        .map(|(position, raw)| {
            if raw.is_empty() {
                Err(XmlPathError::EmptySegment {
                    path: source.to_string(),
                    position,
                })
            } else {
                Ok(segment(raw))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PathExpression::new(source, segments))
}

/// Splits on `.` outside of brackets. An unclosed `[` swallows the rest of the path
/// into a single segment, which can never name an element.
fn split_segments(input: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in input.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                segments.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&input[start..]);
    segments
}

// --- Segment Parsers ---

fn segment(raw: &str) -> PathSegment {
    match alt((attribute_segment, bracketed_segment)).parse(raw) {
        Ok((_, segment)) => segment,
        Err(_) => PathSegment::Child(raw.to_string()),
    }
}

fn attribute_segment(input: &str) -> IResult<&str, PathSegment> {
    map(preceded(tag("@_"), rest), |name: &str| {
        PathSegment::Attribute(name.to_string())
    })
    .parse(input)
}

/// `name[...]`. Anything after the closing bracket is ignored. A bracket body that is
/// not a single `@attr=value` test leaves a plain child lookup on `name`.
fn bracketed_segment(input: &str) -> IResult<&str, PathSegment> {
    map(
        (
            take_until("["),
            delimited(char('['), take_until("]"), char(']')),
            rest,
        ),
        |(element, body, _): (&str, &str, &str)| match attribute_equality(body) {
            Ok((_, (attribute, value))) => PathSegment::Predicate {
                element: element.to_string(),
                attribute: attribute.to_string(),
                value: value.trim_matches(|c: char| c == '\'' || c == '"').to_string(),
            },
            Err(_) => {
                log::debug!("Ignoring unsupported predicate '[{}]' on '{}'", body, element);
                PathSegment::Child(element.to_string())
            }
        },
    )
    .parse(input)
}

fn attribute_equality(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(preceded(
        char('@'),
        separated_pair(
            take_until("="),
            char('='),
            verify(rest, |value: &str| !value.contains('=')),
        ),
    ))
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child(name: &str) -> PathSegment {
        PathSegment::Child(name.to_string())
    }

    #[test]
    fn test_parse_simple_path() {
        let expr = parse_path("Root.Stops.Stop").unwrap();
        assert_eq!(expr.segments(), &[child("Root"), child("Stops"), child("Stop")]);
        assert_eq!(expr.as_str(), "Root.Stops.Stop");
    }

    #[test]
    fn test_parse_attribute_segment() {
        let expr = parse_path("Stop.@_type").unwrap();
        assert_eq!(
            expr.segments(),
            &[child("Stop"), PathSegment::Attribute("type".to_string())]
        );
    }

    #[test]
    fn test_parse_predicate_strips_quotes() {
        for raw in ["Ref[@kind='PO']", "Ref[@kind=\"PO\"]", "Ref[@kind=PO]"] {
            let expr = parse_path(raw).unwrap();
            assert_eq!(
                expr.segments(),
                &[PathSegment::Predicate {
                    element: "Ref".to_string(),
                    attribute: "kind".to_string(),
                    value: "PO".to_string(),
                }],
                "input: {raw}"
            );
        }
    }

    #[test]
    fn test_dot_inside_predicate_does_not_split() {
        let expr = parse_path("Refs.Ref[@kind='a.b'].Value").unwrap();
        assert_eq!(expr.segments().len(), 3);
        assert_eq!(
            expr.segments()[1],
            PathSegment::Predicate {
                element: "Ref".to_string(),
                attribute: "kind".to_string(),
                value: "a.b".to_string(),
            }
        );
    }

    #[test]
    fn test_unsupported_predicates_fall_back_to_child() {
        for raw in ["Stop[1]", "Stop[@seq]", "Stop[@a='1' and @b='2']", "Stop[@a=b=c]"] {
            let expr = parse_path(raw).unwrap();
            assert_eq!(expr.segments(), &[child("Stop")], "input: {raw}");
        }
    }

    #[test]
    fn test_unclosed_bracket_is_literal() {
        let expr = parse_path("Stops.Stop[@a='1'.StopNumber").unwrap();
        assert_eq!(
            expr.segments(),
            &[child("Stops"), child("Stop[@a='1'.StopNumber")]
        );
    }

    #[test]
    fn test_empty_inputs_are_rejected() {
        assert!(matches!(parse_path("   "), Err(XmlPathError::EmptyPath)));
        assert!(matches!(
            parse_path("a..b"),
            Err(XmlPathError::EmptySegment { position: 1, .. })
        ));
        assert!(matches!(
            parse_path("a."),
            Err(XmlPathError::EmptySegment { position: 1, .. })
        ));
    }
}
