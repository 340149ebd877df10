use anchor_lang::error::{ComparedValues, Error};
use yield_aggregator::utils::AggregatorError;

pub fn error_code(err: &Error) -> u32 {
    match err {
        Error::AnchorError(anchor_error) => anchor_error.error_code_number,
        Error::ProgramError(program_error) => panic!("unexpected program error: {program_error:?}"),
    }
}

pub fn assert_error<T: std::fmt::Debug>(result: anchor_lang::Result<T>, expected: AggregatorError) {
    let err = result.expect_err("operation should fail");
    assert_eq!(error_code(&err), u32::from(expected), "got {err}");
}

/// The two values an error carries, e.g. requested amount and ceiling.
pub fn error_values<T: std::fmt::Debug>(result: anchor_lang::Result<T>) -> (String, String) {
    match result.expect_err("operation should fail") {
        Error::AnchorError(anchor_error) => match anchor_error.compared_values {
            Some(ComparedValues::Values(values)) => values,
            other => panic!("expected compared values, got {other:?}"),
        },
        Error::ProgramError(program_error) => panic!("unexpected program error: {program_error:?}"),
    }
}
