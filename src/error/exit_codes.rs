use crate::error::BinvokeError;

pub fn get_exit_code(error: &BinvokeError) -> i32 {
    match error {
        BinvokeError::ValidationError(_)
        | BinvokeError::ConfigFile(_)
        | BinvokeError::InvalidConfig(_) => 2,

        BinvokeError::UnsupportedPlatform { .. } => 3,

        BinvokeError::PermissionDenied(_) => 13,

        BinvokeError::BinaryNotFound { .. } => 127, // Standard "command not found" exit code

        _ => 1,
    }
}
