// nom parser combinators
use nom::character::complete::space0;
use nom::number::complete::double;
use nom::sequence::preceded;
use nom::IResult;

/// Leading double from a fixed-width field, `None` when nothing parses
///
/// ENSDF energy fields carry occasional non-numeric suffixes ("1234.5+X"),
/// so only the leading float is taken and the rest is ignored.
pub(crate) fn field_f64(i: &str) -> Option<f64> {
    let result: IResult<&str, f64> = preceded(space0, double)(i.trim_end());
    result.ok().map(|(_, value)| value)
}

/// Leading signed integer from a fixed-width field, `None` when blank
pub(crate) fn field_i32(i: &str) -> Option<i32> {
    i.trim().parse::<i32>().ok()
}
