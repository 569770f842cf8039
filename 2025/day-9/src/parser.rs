use chumsky::prelude::*;
use glam::I64Vec2;

use crate::error::PolygonError;

pub type Point = I64Vec2;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Point>, extra::Err<Rich<'a, char>>> {
    let coord = just('-')
        .or_not()
        .then(text::int(10))
        .to_slice()
        .try_map(|digits: &str, span| {
            digits
                .parse::<i64>()
                .map_err(|e| Rich::custom(span, format!("{digits}: {e}")))
        });

    coord
        .then_ignore(just(','))
        .then(coord)
        .map(|(x, y)| Point::new(x, y))
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// Parses one `X,Y` vertex per line, keeping file order.
pub fn parse_points(input: &str) -> Result<Vec<Point>, PolygonError> {
    parser().parse(input).into_result().map_err(|errors| {
        // chumsky reports at least one error on failure; the first is the most useful.
        let (span, reason) = errors
            .first()
            .map(|e| (e.span().start..e.span().end, e.to_string()))
            .unwrap_or_else(|| (0..input.len(), String::from("unknown error")));
        PolygonError::Parse {
            src: input.to_string(),
            span: span.into(),
            reason,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn parses_example() -> miette::Result<()> {
        let points = parse_points("7,1\n11,1\n11,7\n")?;
        assert_eq!(
            vec![Point::new(7, 1), Point::new(11, 1), Point::new(11, 7)],
            points
        );
        Ok(())
    }

    #[test]
    fn parses_negative_coordinates() -> miette::Result<()> {
        let points = parse_points("-3,4\r\n0,-12")?;
        assert_eq!(vec![Point::new(-3, 4), Point::new(0, -12)], points);
        Ok(())
    }

    #[test]
    fn empty_input_has_no_points() -> miette::Result<()> {
        assert!(parse_points("")?.is_empty());
        Ok(())
    }

    #[rstest]
    #[case("7;1")]
    #[case("7,1\n11")]
    #[case("7,1\n\n11,1")]
    #[case("a,b")]
    #[case("99999999999999999999,1")]
    fn rejects_malformed_lines(#[case] input: &str) {
        assert!(matches!(
            parse_points(input),
            Err(PolygonError::Parse { .. })
        ));
    }
}
