use itertools::Itertools;
use miette::*;

use crate::parser::parse_points;
use crate::polygon::lattice_area;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input)?;

    // Any two red tiles can be opposite corners; the loop they form is ignored.
    let max_area = points
        .iter()
        .tuple_combinations()
        .map(|(a, b)| lattice_area(*a, *b))
        .fold_ok(0, u128::max)?;

    Ok(max_area.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3";
        assert_eq!("50", process(input)?);
        Ok(())
    }

    #[test]
    fn needs_two_tiles() -> Result<()> {
        assert_eq!("0", process("")?);
        assert_eq!("0", process("4,4")?);
        Ok(())
    }

    #[test]
    fn handles_coordinates_past_u32() -> Result<()> {
        assert_eq!("25000000010000000001", process("0,0\n5000000000,5000000000")?);
        Ok(())
    }

    #[test]
    fn oversized_area_is_an_error() {
        let err = process("-9223372036854775808,-9223372036854775808\n9223372036854775807,9223372036854775807")
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::error::PolygonError>(),
            Some(crate::error::PolygonError::AreaOverflow { .. })
        ));
    }

    #[test]
    fn ignores_loop_shape() -> Result<()> {
        // Diagonal steps are fine here, only part 2 walks the loop.
        assert_eq!("16", process("0,0\n3,3\n1,2")?);
        Ok(())
    }
}
